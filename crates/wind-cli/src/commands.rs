use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::info;

use wind_cli::check::{CheckOptions, DesignBasis, PostcodeCheck, check_postcodes};
use wind_cli::config::DatasetConfig;
use wind_datasets::DatasetCache;
use wind_factors::{DurationCategory, SeasonColumn};

use crate::cli::CheckArgs;
use crate::summary::{apply_table_style, header_cell};

/// Checks from one `check` invocation.
pub struct CheckRun {
    pub checks: Vec<PostcodeCheck>,
    pub basis: Option<DesignBasis>,
}

impl CheckRun {
    pub fn has_invalid(&self) -> bool {
        self.checks.iter().any(PostcodeCheck::is_invalid)
    }
}

pub fn run_durations() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Label"),
        header_cell("Return period"),
        header_cell("Season column"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for category in DurationCategory::ALL {
        table.add_row(vec![
            category.id().to_string(),
            category.label().to_string(),
            format!("{} years", category.return_period_years()),
            category
                .season_column()
                .map_or("-", SeasonColumn::as_str)
                .to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn run_check(args: &CheckArgs) -> Result<CheckRun> {
    let basis = match (args.month, args.duration.as_deref()) {
        (Some(month), Some(duration)) => {
            Some(DesignBasis::parse(month, duration).context("invalid design basis")?)
        }
        _ => None,
    };

    let config = DatasetConfig::load_or_default(args.datasets.config.as_deref())
        .context("load dataset config")?
        .with_overrides(&args.datasets.overrides());
    info!(
        altitude = %config.altitude_path().display(),
        wind = %config.wind_path().display(),
        "Loading datasets"
    );

    let cache = DatasetCache::new(config.source());
    cache
        .ensure()
        .await
        .context("failed to load postcode datasets")?;

    let options = CheckOptions {
        basis,
        fence_height_m: args.fence_height,
        altitude_override_m: args.altitude,
        terrain: args.terrain,
    };
    let checks = check_postcodes(&cache, &args.postcodes, &options).await?;
    Ok(CheckRun { checks, basis })
}
