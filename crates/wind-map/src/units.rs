//! Unit detection from header text and conversion to SI wind measures.

use crate::plausibility::parse_number;

/// Coefficient relating basic wind pressure (kPa) to speed (m/s): `q = k·v²`.
pub const WIND_PRESSURE_COEFFICIENT: f64 = 0.0005;

/// Speed unit declared by a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    #[default]
    MetresPerSecond,
    MilesPerHour,
    KilometresPerHour,
    Knots,
    FeetPerSecond,
    FeetPerMinute,
}

impl SpeedUnit {
    /// Reads the unit from raw and normalized header text (case-insensitive).
    pub fn from_header(raw: &str, normalized: &str) -> Self {
        let header = header_haystack(raw, normalized);
        if header.contains("mph") {
            Self::MilesPerHour
        } else if header.contains("kmh") || header.contains("kph") {
            Self::KilometresPerHour
        } else if header.contains("knots") {
            Self::Knots
        } else if header.contains("ft/s") || header.contains("fts") {
            Self::FeetPerSecond
        } else if header.contains("ft/min") || header.contains("ftmin") {
            Self::FeetPerMinute
        } else {
            Self::MetresPerSecond
        }
    }

    pub fn to_metres_per_second(self, value: f64) -> f64 {
        match self {
            Self::MetresPerSecond => value,
            Self::MilesPerHour => value * 0.44704,
            Self::KilometresPerHour => value / 3.6,
            Self::Knots => value * 0.514444,
            Self::FeetPerSecond => value * 0.3048,
            Self::FeetPerMinute => value * 0.00508,
        }
    }

    /// Parses a cell and converts it to m/s.
    pub fn convert(self, raw: &str) -> Option<f64> {
        parse_number(raw).map(|value| self.to_metres_per_second(value))
    }
}

/// Pressure unit declared by a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureUnit {
    #[default]
    Kilopascal,
    Pascal,
    NewtonPerSquareMetre,
    PoundPerSquareInch,
    PoundPerSquareFoot,
}

impl PressureUnit {
    /// Reads the unit from raw and normalized header text (case-insensitive).
    pub fn from_header(raw: &str, normalized: &str) -> Self {
        let header = header_haystack(raw, normalized);
        if header.contains("pa") && !header.contains("kpa") {
            Self::Pascal
        } else if header.contains("n/m2") || header.contains("nm2") {
            Self::NewtonPerSquareMetre
        } else if header.contains("psi") {
            Self::PoundPerSquareInch
        } else if header.contains("psf") || header.contains("lb/ft2") {
            Self::PoundPerSquareFoot
        } else {
            Self::Kilopascal
        }
    }

    pub fn to_kilopascal(self, value: f64) -> f64 {
        match self {
            Self::Kilopascal => value,
            Self::Pascal | Self::NewtonPerSquareMetre => value / 1000.0,
            Self::PoundPerSquareInch => value * 6.89476,
            Self::PoundPerSquareFoot => value * 0.0478803,
        }
    }

    /// Parses a cell and converts it to kPa.
    pub fn convert(self, raw: &str) -> Option<f64> {
        parse_number(raw).map(|value| self.to_kilopascal(value))
    }
}

fn header_haystack(raw: &str, normalized: &str) -> String {
    format!("{normalized} {raw}").to_lowercase()
}

/// Rounds to three decimals.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Basic pressure in kPa for a speed in m/s, rounded to three decimals.
pub fn pressure_from_speed(speed_ms: f64) -> f64 {
    round3(WIND_PRESSURE_COEFFICIENT * speed_ms * speed_ms)
}

/// Speed in m/s for a basic pressure in kPa.
pub fn speed_from_pressure(pressure_kpa: f64) -> f64 {
    (pressure_kpa / WIND_PRESSURE_COEFFICIENT).sqrt()
}

/// Completes a wind pair when only one half is known.
///
/// Returns `(speed_ms, pressure_kpa)`, or `None` when neither half is
/// present or the derived pair is not finite.
pub fn complete_wind_pair(speed_ms: Option<f64>, pressure_kpa: Option<f64>) -> Option<(f64, f64)> {
    let (speed, pressure) = match (speed_ms, pressure_kpa) {
        (None, None) => return None,
        (Some(speed), Some(pressure)) => (speed, pressure),
        (Some(speed), None) => (speed, pressure_from_speed(speed)),
        (None, Some(pressure)) => (speed_from_pressure(pressure), pressure),
    };
    (speed.is_finite() && pressure.is_finite()).then_some((speed, pressure))
}
