//! Error types for dataset file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a dataset file from disk.
///
/// Parsing itself never fails: malformed text degrades to an empty table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset file not found.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding we do not decode.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/vbpostcode.csv"),
        };
        assert_eq!(err.to_string(), "dataset file not found: /data/vbpostcode.csv");
    }

    #[test]
    fn test_encoding_error_display() {
        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("alt.csv"),
            encoding: "UTF-16 LE",
        };
        assert_eq!(err.to_string(), "unsupported encoding UTF-16 LE in alt.csv");
    }
}
