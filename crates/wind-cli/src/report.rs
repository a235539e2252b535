//! Plain-text report of postcode checks.

use wind_datasets::SiteLookup;
use wind_factors::DesignWind;
use wind_model::{
    format_factor, format_postcode, format_pressure, format_roughness, format_wind_speed,
    is_valid_uk_postcode,
};

use crate::check::{DesignBasis, PostcodeCheck};

const FALLBACK_NOTE: &str =
    "    ↳ Using deterministic fallback wind estimate (dataset match not found).";

/// Renders every check, separated by blank lines.
///
/// The design basis, when given, heads the report.
pub fn render_report(checks: &[PostcodeCheck], basis: Option<&DesignBasis>) -> String {
    let mut blocks = Vec::with_capacity(checks.len() + 1);
    if let Some(basis) = basis {
        blocks.push(format!("Design basis: {}", basis.describe()));
    }
    blocks.extend(checks.iter().map(render_check));
    blocks.join("\n\n")
}

/// Renders one check without a trailing newline.
pub fn render_check(check: &PostcodeCheck) -> String {
    if check.is_invalid() {
        return format!("✖ {} → invalid postcode", check.input);
    }

    let formatted = format_postcode(&check.input);
    let mut lines = vec![if is_valid_uk_postcode(&check.input) {
        format!("Postcode: {formatted}")
    } else {
        format!("Postcode: {formatted} (unrecognised format)")
    }];
    lines.push(altitude_line(&check.site));
    lines.push(wind_line(&check.site));
    if check.site.uses_fallback_wind() {
        lines.push(FALLBACK_NOTE.to_string());
    }
    if let Some(design) = &check.design {
        lines.extend(design_lines(design));
    }
    lines.join("\n")
}

fn altitude_line(site: &SiteLookup) -> String {
    let value = site
        .altitude
        .map_or_else(|| "n/a".to_string(), |altitude| altitude.to_string());
    let source = match &site.sources.altitude {
        Some(matched) => format!("dataset ({matched})"),
        None => "not found".to_string(),
    };
    format!("  Altitude: {value} m [{source}]")
}

fn wind_line(site: &SiteLookup) -> String {
    let Some(wind) = &site.wind else {
        return "  Wind speed: n/a".to_string();
    };
    let source = if wind.is_dataset() {
        format!("dataset ({})", wind.match_text)
    } else {
        "fallback".to_string()
    };
    format!(
        "  Wind speed: {:.2} m/s, pressure {:.2} kPa [{source}]",
        wind.speed_ms, wind.pressure_kpa
    )
}

fn design_lines(design: &DesignWind) -> [String; 3] {
    let factors = &design.factors;
    [
        format!(
            "  Design wind: {}, pressure {}",
            format_wind_speed(design.speed_ms),
            format_pressure(design.pressure_kpa)
        ),
        format!(
            "    Factors: c_prob {}, c_season {}, c_alt {}, c_dir {}",
            format_factor(factors.c_prob),
            format_factor(factors.c_season),
            format_factor(factors.c_alt),
            format_factor(factors.c_dir)
        ),
        format!(
            "    Site: altitude {} m, reference height {} m, terrain {} (z0 {})",
            design.altitude_m,
            design.reference_height_m,
            design.terrain,
            format_roughness(design.roughness_z0_m)
        ),
    ]
}
