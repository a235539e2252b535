//! Error types for dataset loading.

use thiserror::Error;
use wind_ingest::IngestError;

use crate::source::DatasetKind;

/// Errors that can occur while fetching or building the datasets.
///
/// A failed build is shared by every caller that was waiting on it, so the
/// cache hands these out behind an `Arc`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    /// Reading a dataset file failed.
    #[error("failed to read {kind} dataset")]
    Ingest {
        kind: DatasetKind,
        #[source]
        source: IngestError,
    },

    /// A dataset source could not deliver its text.
    #[error("failed to fetch {kind} dataset: {message}")]
    Fetch { kind: DatasetKind, message: String },

    /// A background task panicked or was cancelled.
    #[error("dataset task failed")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl DatasetError {
    /// The dataset this error concerns, when known.
    pub fn kind(&self) -> Option<DatasetKind> {
        match self {
            Self::Ingest { kind, .. } | Self::Fetch { kind, .. } => Some(*kind),
            Self::Task { .. } => None,
        }
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
