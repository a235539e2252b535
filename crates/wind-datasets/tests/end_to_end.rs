//! End-to-end lookups through the cache and file-backed sources.

use std::fs;

use wind_datasets::{
    DEFAULT_ALTITUDE_FILE, DEFAULT_WIND_FILE, DatasetCache, DatasetError, FileDatasetSource,
    LookupStatus, build_altitude_index, build_wind_index, find_best_record, lookup_datasets,
};
use wind_model::{PostcodeKey, WindSource};

#[test]
fn sector_wind_and_exact_altitude() {
    let altitude_index = build_altitude_index("Postcode,Alt\nSW1A1AA,20\n");
    let wind_index = build_wind_index("Postcode,Speed\nSW1A,25\n");
    let datasets = wind_datasets::Datasets {
        altitude_index,
        wind_index,
    };

    let lookup = lookup_datasets(&datasets, "SW1A1AA");
    assert_eq!(lookup.altitude, Some(20.0));
    assert_eq!(lookup.altitude_match.as_deref(), Some("SW1A1AA"));

    let wind = lookup.wind.expect("wind");
    assert_eq!(wind.speed_ms, 25.0);
    assert_eq!(wind.source, WindSource::Dataset);
    assert_eq!(wind.match_key.as_str(), "SW1A");
    assert_eq!(
        wind.describe_source(),
        "Derived from postcode wind dataset (SW1A)"
    );
}

#[test]
fn padded_quoted_fields_keep_value_columns() {
    let altitude_index = build_altitude_index(
        "Postcode, Name, Alt\nSW1A 1AA, \"Smith, J\", 20\nE1 6AN, \"Jones, K\", \"1,200\"\n",
    );
    assert_eq!(altitude_index.get("SW1A1AA").map(|record| record.value), Some(20.0));
    assert_eq!(altitude_index.get("E16AN").map(|record| record.value), Some(1200.0));

    let wind_index = build_wind_index("Postcode, Region, Speed\nSW1A, \"London, C\", \"25\"\n");
    assert_eq!(
        wind_index.get("SW1A").map(|record| record.value.speed_ms),
        Some(25.0)
    );
}

#[test]
fn district_row_serves_whole_district() {
    let wind_index = build_wind_index("Postcode,Speed\nSW1,23\n");
    let matched =
        find_best_record(&wind_index, &PostcodeKey::sector("SW1A 1AA")).expect("district match");
    assert_eq!(matched.matched_key.as_str(), "SW1");
    assert_eq!(matched.record.value.speed_ms, 23.0);
}

#[tokio::test]
async fn file_source_feeds_cache() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(DEFAULT_ALTITUDE_FILE),
        "\u{feff}Postcode;Elevation (m)\r\nSW1A 1AA;20\r\nE1 6AN;12\r\n",
    )
    .expect("write altitude");
    // Not valid UTF-8: the header ends in a Windows-1252 byte.
    let mut wind = b"Postcode,Wind speed (mph) \xe9\n".to_vec();
    wind.extend_from_slice(b"SW1A 1AA,44.7\nE1,50\n");
    fs::write(dir.path().join(DEFAULT_WIND_FILE), wind).expect("write wind");

    let cache = DatasetCache::new(FileDatasetSource::in_dir(dir.path()));
    let site = cache.lookup("sw1a 1aa").await;

    assert_eq!(site.status, LookupStatus::Ready);
    assert_eq!(site.altitude, Some(20.0));
    assert_eq!(site.sources.altitude.as_deref(), Some("SW1A 1AA"));
    let wind = site.wind.expect("wind");
    assert!((wind.speed_ms - 19.98).abs() < 0.01);
    assert_eq!(wind.match_text, "SW1A 1AA");

    let east = cache.lookup("E1 6AN").await;
    assert_eq!(east.altitude, Some(12.0));
    assert!((east.wind.expect("wind").speed_ms - 22.352).abs() < 1e-9);
}

#[tokio::test]
async fn missing_files_leave_cache_retryable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = DatasetCache::new(FileDatasetSource::in_dir(dir.path()));

    let error = cache.ensure().await.expect_err("files are missing");
    assert!(matches!(*error, DatasetError::Ingest { .. }));
    assert_eq!(cache.lookup("SW1A 1AA").await.status, LookupStatus::Unavailable);

    fs::write(dir.path().join(DEFAULT_ALTITUDE_FILE), "Postcode,Alt\nSW1A1AA,20\n")
        .expect("write altitude");
    fs::write(dir.path().join(DEFAULT_WIND_FILE), "Postcode,Speed\nSW1A,25\n").expect("write wind");

    let site = cache.lookup("SW1A 1AA").await;
    assert_eq!(site.status, LookupStatus::Ready);
    assert_eq!(site.wind.map(|w| w.speed_ms), Some(25.0));
}
