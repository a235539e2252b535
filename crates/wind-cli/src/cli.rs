//! CLI argument definitions for the dataset checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wind_cli::config::DatasetOverrides;
use wind_model::TerrainCategory;

#[derive(Parser)]
#[command(
    name = "wind-check",
    version,
    about = "Check postcode altitude and wind against the reference datasets",
    long_about = "Look up postcodes in the altitude and wind datasets.\n\n\
                  Uses the same dataset cache and lookup as the site form. \
                  Postcodes without a wind match get the deterministic fallback estimate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up altitude and wind for one or more postcodes.
    Check(CheckArgs),

    /// List the supported exposure duration categories.
    Durations,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Postcodes to look up.
    #[arg(value_name = "POSTCODE", required = true)]
    pub postcodes: Vec<String>,

    #[command(flatten)]
    pub datasets: DatasetArgs,

    /// Installation month (1-12). Together with --duration, prints design wind.
    #[arg(
        long,
        value_name = "MONTH",
        value_parser = clap::value_parser!(u8).range(1..=12),
        requires = "duration"
    )]
    pub month: Option<u8>,

    /// Exposure duration category, e.g. UNDER_4_MONTHS (see `wind-check durations`).
    #[arg(long, value_name = "CATEGORY", requires = "month")]
    pub duration: Option<String>,

    /// Fence height in metres, used as the reference height.
    #[arg(long = "fence-height", value_name = "METRES")]
    pub fence_height: Option<f64>,

    /// Site altitude in metres AOD, replacing the dataset altitude.
    #[arg(long, value_name = "METRES")]
    pub altitude: Option<f64>,

    /// Terrain category (0, I, II, III, IV).
    #[arg(long, value_name = "CATEGORY", default_value = "III")]
    pub terrain: TerrainCategory,
}

/// Dataset location flags.
#[derive(Args)]
pub struct DatasetArgs {
    /// TOML file naming the data directory and dataset files.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the dataset files (default: data).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Altitude dataset, relative to the data directory unless absolute.
    #[arg(long = "altitude-file", value_name = "PATH")]
    pub altitude_file: Option<PathBuf>,

    /// Wind dataset, relative to the data directory unless absolute.
    #[arg(long = "wind-file", value_name = "PATH")]
    pub wind_file: Option<PathBuf>,
}

impl DatasetArgs {
    pub fn overrides(&self) -> DatasetOverrides {
        DatasetOverrides {
            data_dir: self.data_dir.clone(),
            altitude_file: self.altitude_file.clone(),
            wind_file: self.wind_file.clone(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
