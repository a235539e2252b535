//! Progressive postcode lookup against the dataset indices.

use serde::Serialize;
use wind_model::{MatchedRecord, PostcodeKey, WindResult, WindSource};

use crate::index::{DatasetIndex, Datasets};

/// Finds the most specific record for `key`.
///
/// The key is looked up as given, then with its last character dropped, and
/// so on until a record is found or nothing is left.
pub fn find_best_record<'a, V>(
    index: &'a DatasetIndex<V>,
    key: &PostcodeKey,
) -> Option<MatchedRecord<'a, V>> {
    let mut cursor = key.clone();
    while !cursor.is_empty() {
        if let Some(record) = index.get(cursor.as_str()) {
            return Some(MatchedRecord {
                record,
                matched_key: cursor,
            });
        }
        cursor.shorten();
    }
    None
}

/// Dataset answers for one postcode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetLookup {
    /// Altitude in metres.
    pub altitude: Option<f64>,
    /// Dataset spelling of the postcode the altitude came from.
    pub altitude_match: Option<String>,
    pub wind: Option<WindResult>,
}

/// Looks a postcode up in both indices.
///
/// Altitude narrows from the full postcode. Wind first reduces the postcode
/// to its sector and narrows from there.
pub fn lookup_datasets(datasets: &Datasets, postcode: &str) -> DatasetLookup {
    let full = PostcodeKey::full(postcode);
    if full.is_empty() {
        return DatasetLookup::default();
    }

    let altitude = find_best_record(&datasets.altitude_index, &full);
    let wind = find_best_record(&datasets.wind_index, &full.to_sector()).map(|matched| {
        let match_text = matched.display_text().to_string();
        WindResult::from_measure(
            matched.record.value,
            WindSource::Dataset,
            match_text,
            matched.matched_key,
        )
    });

    tracing::debug!(
        postcode = %full,
        altitude_key = altitude.as_ref().map_or("-", |m| m.matched_key.as_str()),
        wind_key = wind.as_ref().map_or("-", |w| w.match_key.as_str()),
        "Dataset lookup"
    );

    DatasetLookup {
        altitude: altitude.as_ref().map(|matched| matched.record.value),
        altitude_match: altitude.map(|matched| matched.display_text().to_string()),
        wind,
    }
}
