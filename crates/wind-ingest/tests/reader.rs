use std::fs;

use wind_ingest::{IngestError, parse_table, read_dataset_file, read_dataset_file_with_limit};

#[test]
fn reads_and_parses_dataset_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Postcode_elevation.csv");
    fs::write(&path, "\u{feff}pcds|height_m\nSW1A 1AA|20\nE1 6AN|12\n").expect("write file");

    let text = read_dataset_file(&path).expect("read dataset");
    let table = parse_table(&text);
    assert_eq!(table.headers, vec!["pcds", "height_m"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(1, 0), "E1 6AN");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_dataset_file(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("big.csv");
    fs::write(&path, "Postcode,Alt\nSW1A1AA,20\n").expect("write file");
    let err = read_dataset_file_with_limit(&path, 4).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
}

#[test]
fn utf16_files_are_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("utf16.csv");
    fs::write(&path, [0xFF, 0xFE, b'P', 0x00]).expect("write file");
    let err = read_dataset_file(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}
