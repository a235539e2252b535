//! Semantic fields and their matching configuration.
//!
//! Token lists are matched against normalized headers (lowercase, ASCII
//! alphanumerics only) in priority order. Unit lists name the suffixes a cell
//! value may carry and still count as plausible.

use std::fmt;

use crate::plausibility::{looks_like_altitude, looks_like_postcode, looks_like_pressure, looks_like_speed};

/// A column role the resolver can look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    Postcode,
    Altitude,
    WindSpeed,
    WindPressure,
}

/// Static matching configuration for one [`SemanticField`].
#[derive(Debug)]
pub struct FieldProfile {
    /// Header tokens, highest priority first.
    pub tokens: &'static [&'static str],
    /// Accepted unit suffixes on cell values (empty for non-numeric fields).
    pub units: &'static [&'static str],
    /// Column assumed when no header matches.
    pub fallback_column: Option<usize>,
    /// Plausibility check for a single cell value.
    pub predicate: fn(&str) -> bool,
}

pub const POSTCODE_TOKENS: &[&str] = &[
    "postcode",
    "pcds",
    "pcd7",
    "pcd8",
    "pc",
    "postcodesector",
    "postcodearea",
];

pub const ALTITUDE_TOKENS: &[&str] = &[
    "altitude",
    "altitudem",
    "altitudemaod",
    "altitudeaod",
    "altitude_m",
    "altitudemaodm",
    "altitudepaod",
    "altitudevalue",
    "altmaod",
    "altm",
    "maod",
    "aod",
    "elevation",
    "elevationm",
    "groundlevel",
    "height",
    "heightm",
];

pub const WIND_SPEED_TOKENS: &[&str] = &[
    "windspeedms",
    "windspeed",
    "windspeedmps",
    "windspeedm_s",
    "basicwindspeed",
    "designwindspeed",
    "windvb",
    "vbmap",
    "vbms",
    "vbref",
    "vb",
    "vref",
    "speed",
];

pub const WIND_PRESSURE_TOKENS: &[&str] = &[
    "windpressure",
    "designpressure",
    "pressure",
    "pressurekpa",
    "q10",
    "q1",
    "q",
    "kpa",
];

pub const ALTITUDE_UNITS: &[&str] = &[
    "m",
    "maod",
    "aod",
    "maodm",
    "maodft",
    "maodmetres",
    "maodmeters",
];

pub const WIND_SPEED_UNITS: &[&str] = &["mps", "ms", "mph", "kmh", "kph", "kn", "kts", "knots"];

pub const WIND_PRESSURE_UNITS: &[&str] = &["kpa", "pa", "nmm2", "nm2", "psf", "psi"];

static POSTCODE: FieldProfile = FieldProfile {
    tokens: POSTCODE_TOKENS,
    units: &[],
    fallback_column: Some(0),
    predicate: looks_like_postcode,
};

static ALTITUDE: FieldProfile = FieldProfile {
    tokens: ALTITUDE_TOKENS,
    units: ALTITUDE_UNITS,
    fallback_column: None,
    predicate: looks_like_altitude,
};

static WIND_SPEED: FieldProfile = FieldProfile {
    tokens: WIND_SPEED_TOKENS,
    units: WIND_SPEED_UNITS,
    fallback_column: None,
    predicate: looks_like_speed,
};

static WIND_PRESSURE: FieldProfile = FieldProfile {
    tokens: WIND_PRESSURE_TOKENS,
    units: WIND_PRESSURE_UNITS,
    fallback_column: None,
    predicate: looks_like_pressure,
};

impl SemanticField {
    pub const ALL: [Self; 4] = [
        Self::Postcode,
        Self::Altitude,
        Self::WindSpeed,
        Self::WindPressure,
    ];

    pub fn profile(self) -> &'static FieldProfile {
        match self {
            Self::Postcode => &POSTCODE,
            Self::Altitude => &ALTITUDE,
            Self::WindSpeed => &WIND_SPEED,
            Self::WindPressure => &WIND_PRESSURE,
        }
    }

    /// Runs the field's plausibility predicate on one cell value.
    pub fn is_plausible(self, value: &str) -> bool {
        (self.profile().predicate)(value)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postcode => "postcode",
            Self::Altitude => "altitude",
            Self::WindSpeed => "wind speed",
            Self::WindPressure => "wind pressure",
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
