//! Where dataset text comes from.
//!
//! The cache only needs the two raw texts. [`FileDatasetSource`] reads them
//! from disk on the blocking pool; [`StaticDatasetSource`] serves text that is
//! already in memory.

use std::fmt;
use std::path::{Path, PathBuf};

use futures_util::future::{self, BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use wind_ingest::read_dataset_file;

use crate::error::{DatasetError, Result};

/// Default file name of the postcode altitude dataset.
pub const DEFAULT_ALTITUDE_FILE: &str = "Postcode_elevation.csv";

/// Default file name of the postcode wind dataset.
pub const DEFAULT_WIND_FILE: &str = "vbpostcode.csv";

/// Which of the two datasets something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Altitude,
    Wind,
}

impl DatasetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Altitude => "altitude",
            Self::Wind => "wind",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of both datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetTexts {
    pub altitude: String,
    pub wind: String,
}

impl DatasetTexts {
    pub fn new(altitude: impl Into<String>, wind: impl Into<String>) -> Self {
        Self {
            altitude: altitude.into(),
            wind: wind.into(),
        }
    }
}

/// Supplies dataset text to a [`DatasetCache`](crate::DatasetCache).
///
/// The returned future must be `'static`: it runs on a spawned task that
/// outlives the caller that started it.
pub trait DatasetSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'static, Result<DatasetTexts>>;
}

/// Reads both datasets from files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDatasetSource {
    altitude_path: PathBuf,
    wind_path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(altitude_path: impl Into<PathBuf>, wind_path: impl Into<PathBuf>) -> Self {
        Self {
            altitude_path: altitude_path.into(),
            wind_path: wind_path.into(),
        }
    }

    /// Source using the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_ALTITUDE_FILE), dir.join(DEFAULT_WIND_FILE))
    }

    pub fn altitude_path(&self) -> &Path {
        &self.altitude_path
    }

    pub fn wind_path(&self) -> &Path {
        &self.wind_path
    }
}

impl DatasetSource for FileDatasetSource {
    fn fetch(&self) -> BoxFuture<'static, Result<DatasetTexts>> {
        let altitude = read_text(DatasetKind::Altitude, self.altitude_path.clone());
        let wind = read_text(DatasetKind::Wind, self.wind_path.clone());
        async move {
            let (altitude, wind) = future::try_join(altitude, wind).await?;
            Ok(DatasetTexts { altitude, wind })
        }
        .boxed()
    }
}

/// Reads and decodes one file on the blocking thread pool.
async fn read_text(kind: DatasetKind, path: PathBuf) -> Result<String> {
    tracing::debug!(%kind, path = %path.display(), "Reading dataset file");
    tokio::task::spawn_blocking(move || read_dataset_file(&path))
        .await
        .map_err(|source| DatasetError::Task { source })?
        .map_err(|source| DatasetError::Ingest { kind, source })
}

/// Serves dataset text held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDatasetSource {
    texts: DatasetTexts,
}

impl StaticDatasetSource {
    pub fn new(altitude: impl Into<String>, wind: impl Into<String>) -> Self {
        Self {
            texts: DatasetTexts::new(altitude, wind),
        }
    }
}

impl DatasetSource for StaticDatasetSource {
    fn fetch(&self) -> BoxFuture<'static, Result<DatasetTexts>> {
        future::ready(Ok(self.texts.clone())).boxed()
    }
}
