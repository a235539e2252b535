//! Wind results handed to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::postcode::{PostcodeKey, format_postcode};
use crate::record::WindMeasure;

/// Where a wind result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindSource {
    /// Matched a row of the wind dataset.
    Dataset,
    /// Deterministic estimate used when no dataset row matched.
    Fallback,
}

impl WindSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for WindSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wind speed and pressure for a queried postcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindResult {
    pub speed_ms: f64,
    pub pressure_kpa: f64,
    pub vb_map: f64,
    pub source: WindSource,
    /// Dataset spelling of the matched postcode (or the normalized query).
    #[serde(rename = "match")]
    pub match_text: String,
    pub match_key: PostcodeKey,
}

impl WindResult {
    pub fn from_measure(
        measure: WindMeasure,
        source: WindSource,
        match_text: impl Into<String>,
        match_key: PostcodeKey,
    ) -> Self {
        Self {
            speed_ms: measure.speed_ms,
            pressure_kpa: measure.pressure_kpa,
            vb_map: measure.vb_map,
            source,
            match_text: match_text.into(),
            match_key,
        }
    }

    pub fn is_dataset(&self) -> bool {
        self.source == WindSource::Dataset
    }

    /// Human readable provenance line.
    pub fn describe_source(&self) -> String {
        match self.source {
            WindSource::Dataset => {
                let formatted = format_postcode(&self.match_text);
                let shown = if formatted.is_empty() {
                    "unknown match"
                } else {
                    formatted.as_str()
                };
                format!("Derived from postcode wind dataset ({shown})")
            }
            WindSource::Fallback => "Estimated using fallback rules (no dataset match)".to_string(),
        }
    }
}
