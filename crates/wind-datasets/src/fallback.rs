//! Deterministic wind estimate used when no dataset row matches.

use wind_map::{pressure_from_speed, speed_from_pressure};
use wind_model::{PostcodeKey, WindMeasure, WindResult, WindSource};

/// Upper bound on the fallback basic pressure in kPa.
pub const FALLBACK_PRESSURE_CAP_KPA: f64 = 0.149;

const FALLBACK_BASE_SPEED: u32 = 22;
const FALLBACK_SPREAD: u32 = 11;

/// Estimates wind for a postcode from its characters alone.
///
/// The speed is `22 + (sum of character codes mod 11)`; its pressure is
/// capped at [`FALLBACK_PRESSURE_CAP_KPA`] and the speed is then recomputed
/// from the capped pressure so the pair stays consistent. Returns `None` for
/// a postcode with no usable characters.
pub fn compute_fallback_wind(postcode: &str) -> Option<WindResult> {
    let key = PostcodeKey::full(postcode);
    if key.is_empty() {
        return None;
    }
    let code_sum: u32 = key.as_str().bytes().map(u32::from).sum();
    let initial_speed = f64::from(FALLBACK_BASE_SPEED + code_sum % FALLBACK_SPREAD);
    let pressure_kpa = pressure_from_speed(initial_speed).min(FALLBACK_PRESSURE_CAP_KPA);
    let speed_ms = speed_from_pressure(pressure_kpa).round();

    Some(WindResult::from_measure(
        WindMeasure::new(speed_ms, pressure_kpa),
        WindSource::Fallback,
        key.as_str(),
        key.clone(),
    ))
}
