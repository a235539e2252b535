//! Postcode-keyed dataset indices.
//!
//! The altitude index is keyed by full postcode, the wind index by postcode
//! sector. Rows with an empty key or a missing value are skipped; rows that
//! collide on a key are settled by [`IndexRecord::supersedes`].

use std::collections::HashMap;

use wind_ingest::parse_table;
use wind_map::{
    ColumnMatch, MatchStrength, PressureUnit, SchemaResolver, SemanticField, SpeedUnit,
    complete_wind_pair, parse_number,
};
use wind_model::{IndexRecord, PostcodeKey, WindMeasure};

/// A map from postcode key to its single surviving record.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetIndex<V> {
    records: HashMap<PostcodeKey, IndexRecord<V>>,
}

/// Altitude in metres keyed by full postcode.
pub type AltitudeIndex = DatasetIndex<f64>;

/// Wind measures keyed by postcode sector.
pub type WindIndex = DatasetIndex<WindMeasure>;

impl<V> Default for DatasetIndex<V> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<V> DatasetIndex<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&IndexRecord<V>> {
        self.records.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Inserts a record under its own key.
    ///
    /// Records with an empty key are refused. An existing record is replaced
    /// only when the newcomer supersedes it. Returns whether the record was
    /// stored.
    pub fn insert(&mut self, record: IndexRecord<V>) -> bool {
        if record.key.is_empty() {
            return false;
        }
        match self.records.get(record.key.as_str()) {
            Some(existing) if !record.supersedes(existing) => false,
            _ => {
                self.records.insert(record.key.clone(), record);
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexRecord<V>> + '_ {
        self.records.values()
    }
}

impl<V> FromIterator<IndexRecord<V>> for DatasetIndex<V> {
    fn from_iter<I: IntoIterator<Item = IndexRecord<V>>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// Both indices, built together and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub altitude_index: AltitudeIndex,
    pub wind_index: WindIndex,
}

impl Datasets {
    pub fn is_empty(&self) -> bool {
        self.altitude_index.is_empty() && self.wind_index.is_empty()
    }
}

/// Builds both indices from raw dataset text.
pub fn build_datasets(altitude_text: &str, wind_text: &str) -> Datasets {
    Datasets {
        altitude_index: build_altitude_index(altitude_text),
        wind_index: build_wind_index(wind_text),
    }
}

/// Builds the full-postcode altitude index.
///
/// Returns an empty index when the text has no header row or no altitude
/// column can be resolved.
pub fn build_altitude_index(text: &str) -> AltitudeIndex {
    let table = parse_table(text);
    if table.is_empty() {
        return AltitudeIndex::new();
    }
    let resolver = SchemaResolver::new(&table);
    let postcode_column = postcode_column(&resolver);
    let Some(altitude) = resolver.resolve(SemanticField::Altitude) else {
        tracing::warn!(
            headers = ?table.headers,
            "No altitude column found; altitude index is empty"
        );
        return AltitudeIndex::new();
    };

    let index: AltitudeIndex = (0..table.rows.len())
        .filter_map(|row| {
            let raw = table.cell(row, postcode_column);
            let key = PostcodeKey::full(raw);
            if key.is_empty() {
                return None;
            }
            let value = parse_number(table.cell(row, altitude.index))?;
            Some(IndexRecord {
                value,
                original_text: original_text(raw, &key),
                source_key: key.clone(),
                key,
            })
        })
        .collect();

    tracing::debug!(
        rows = table.rows.len(),
        records = index.len(),
        postcode_column,
        altitude_column = altitude.index,
        "Built altitude index"
    );
    index
}

/// Builds the sector-keyed wind index.
///
/// Speed and pressure columns are resolved independently (one column never
/// serves both). A row needs at least one of them; the missing half is
/// derived from the other.
/// Returns an empty index when neither column can be resolved.
pub fn build_wind_index(text: &str) -> WindIndex {
    let table = parse_table(text);
    if table.is_empty() {
        return WindIndex::new();
    }
    let resolver = SchemaResolver::new(&table);
    let postcode_column = postcode_column(&resolver);
    let (speed, pressure) = separate_wind_columns(
        resolver.resolve(SemanticField::WindSpeed),
        resolver.resolve(SemanticField::WindPressure),
    );
    let speed = speed.map(|column| {
        let unit = SpeedUnit::from_header(
            resolver.header(column.index),
            resolver.normalized_header(column.index),
        );
        (column.index, unit)
    });
    let pressure = pressure.map(|column| {
        let unit = PressureUnit::from_header(
            resolver.header(column.index),
            resolver.normalized_header(column.index),
        );
        (column.index, unit)
    });
    if speed.is_none() && pressure.is_none() {
        tracing::warn!(
            headers = ?table.headers,
            "No wind speed or pressure column found; wind index is empty"
        );
        return WindIndex::new();
    }

    let index: WindIndex = (0..table.rows.len())
        .filter_map(|row| {
            let raw = table.cell(row, postcode_column);
            let key = PostcodeKey::sector(raw);
            if key.is_empty() {
                return None;
            }
            let speed_ms = speed.and_then(|(column, unit)| unit.convert(table.cell(row, column)));
            let pressure_kpa =
                pressure.and_then(|(column, unit)| unit.convert(table.cell(row, column)));
            let (speed_ms, pressure_kpa) = complete_wind_pair(speed_ms, pressure_kpa)?;
            Some(IndexRecord {
                value: WindMeasure::new(speed_ms, pressure_kpa),
                original_text: original_text(raw, &key),
                source_key: PostcodeKey::full(raw),
                key,
            })
        })
        .collect();

    tracing::debug!(
        rows = table.rows.len(),
        records = index.len(),
        postcode_column,
        speed_column = ?speed.map(|(column, _)| column),
        pressure_column = ?pressure.map(|(column, _)| column),
        "Built wind index"
    );
    index
}

fn postcode_column(resolver: &SchemaResolver<'_>) -> usize {
    resolver
        .resolve(SemanticField::Postcode)
        .map_or(0, |column| column.index)
}

fn original_text(raw: &str, key: &PostcodeKey) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        key.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Keeps one of two wind columns that landed on the same index.
///
/// A header-matched column beats a rescored one; otherwise speed is kept.
fn separate_wind_columns(
    speed: Option<ColumnMatch>,
    pressure: Option<ColumnMatch>,
) -> (Option<ColumnMatch>, Option<ColumnMatch>) {
    match (speed, pressure) {
        (Some(speed), Some(pressure)) if speed.index == pressure.index => {
            tracing::debug!(
                column = speed.index,
                "Wind speed and pressure resolved to the same column"
            );
            if speed.strength == MatchStrength::Rescored
                && pressure.strength != MatchStrength::Rescored
            {
                (None, Some(pressure))
            } else {
                (Some(speed), None)
            }
        }
        other => other,
    }
}
