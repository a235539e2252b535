//! Value plausibility checks used to validate candidate columns.
//!
//! Numbers are parsed with [`parse_number`], which yields `None` instead of
//! NaN for anything that is not a finite number.

use std::ops::RangeInclusive;

use wind_model::normalize_postcode;

use crate::field::{ALTITUDE_UNITS, WIND_PRESSURE_UNITS, WIND_SPEED_UNITS};

const ALTITUDE_RANGE: RangeInclusive<f64> = -200.0..=2500.0;
const MAX_WIND_SPEED: f64 = 120.0;
const MAX_WIND_PRESSURE: f64 = 10.0;

/// Parses the numeric content of a cell.
///
/// Every character other than digits, `.`, `+` and `-` is discarded before
/// parsing, so `"12.5 m"` reads as `12.5`. Returns `None` when nothing numeric
/// remains or the result is not finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Unit text following the numeric part of a cell, lowercased.
///
/// Leading digits, signs, separators and whitespace are skipped; the rest is
/// reduced to ASCII alphanumerics (`"0.5 N/mm2"` gives `"nmm2"`).
pub fn unit_suffix(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(|ch: char| {
            ch.is_ascii_digit() || ch.is_whitespace() || matches!(ch, '.' | ',' | '+' | '-' | '\u{2212}')
        })
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn has_allowed_unit(raw: &str, allowed: &[&str]) -> bool {
    let suffix = unit_suffix(raw);
    suffix.is_empty() || allowed.contains(&suffix.as_str())
}

/// Normalized value is non-empty and holds at least one letter and one digit.
pub fn looks_like_postcode(raw: &str) -> bool {
    let normalized = normalize_postcode(raw);
    normalized.bytes().any(|b| b.is_ascii_alphabetic())
        && normalized.bytes().any(|b| b.is_ascii_digit())
}

/// Altitude in metres between -200 and 2500 with an optional height unit.
pub fn looks_like_altitude(raw: &str) -> bool {
    parse_number(raw).is_some_and(|value| ALTITUDE_RANGE.contains(&value))
        && has_allowed_unit(raw, ALTITUDE_UNITS)
}

/// Speed in (0, 120] with an optional speed unit.
pub fn looks_like_speed(raw: &str) -> bool {
    parse_number(raw).is_some_and(|value| value > 0.0 && value <= MAX_WIND_SPEED)
        && has_allowed_unit(raw, WIND_SPEED_UNITS)
}

/// Pressure in (0, 10] with an optional pressure unit.
pub fn looks_like_pressure(raw: &str) -> bool {
    parse_number(raw).is_some_and(|value| value > 0.0 && value <= MAX_WIND_PRESSURE)
        && has_allowed_unit(raw, WIND_PRESSURE_UNITS)
}
