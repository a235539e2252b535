//! Records stored in the postcode-keyed dataset indices.

use serde::{Deserialize, Serialize};

use crate::postcode::PostcodeKey;

/// Wind measures carried by a wind dataset row, already converted to SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindMeasure {
    /// Basic wind speed in m/s.
    pub speed_ms: f64,
    /// Basic wind pressure in kPa.
    pub pressure_kpa: f64,
    /// Mapped basic wind speed before site factors, in m/s.
    pub vb_map: f64,
}

impl WindMeasure {
    /// Builds a measure whose map speed equals the dataset speed.
    pub fn new(speed_ms: f64, pressure_kpa: f64) -> Self {
        Self {
            speed_ms,
            pressure_kpa,
            vb_map: speed_ms,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.speed_ms.is_finite() && self.pressure_kpa.is_finite() && self.vb_map.is_finite()
    }
}

/// One surviving row of a dataset index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord<V> {
    /// Altitude in metres or a [`WindMeasure`].
    pub value: V,
    /// Postcode text as written in the dataset (trimmed), or the key when blank.
    pub original_text: String,
    /// Key the record is stored under.
    pub key: PostcodeKey,
    /// Full normalized postcode of the contributing row.
    pub source_key: PostcodeKey,
}

impl<V> IndexRecord<V> {
    /// True if this record should replace `existing` under the same key.
    ///
    /// The more specific source row wins; equal specificity resolves to the
    /// newcomer.
    pub fn supersedes(&self, existing: &IndexRecord<V>) -> bool {
        self.source_key.len() >= existing.source_key.len()
    }
}

/// A record returned by a lookup, annotated with the key that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRecord<'a, V> {
    pub record: &'a IndexRecord<V>,
    pub matched_key: PostcodeKey,
}

impl<V> MatchedRecord<'_, V> {
    /// Dataset spelling of the match, falling back to the matched key.
    pub fn display_text(&self) -> &str {
        if self.record.original_text.is_empty() {
            self.matched_key.as_str()
        } else {
            &self.record.original_text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str) -> IndexRecord<f64> {
        IndexRecord {
            value: 1.0,
            original_text: source.to_string(),
            key: PostcodeKey::sector(source),
            source_key: PostcodeKey::full(source),
        }
    }

    #[test]
    fn more_specific_source_supersedes() {
        let sector_row = record("SW1A");
        let unit_row = record("SW1A 1AA");
        assert!(unit_row.supersedes(&sector_row));
        assert!(!sector_row.supersedes(&unit_row));
        assert!(sector_row.supersedes(&sector_row.clone()));
    }

    #[test]
    fn measure_defaults_map_speed() {
        let measure = WindMeasure::new(21.5, 0.283);
        assert_eq!(measure.vb_map, 21.5);
        assert!(measure.is_finite());
        assert!(!WindMeasure::new(f64::NAN, 0.1).is_finite());
    }
}
