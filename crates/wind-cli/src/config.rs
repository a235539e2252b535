//! Dataset location configuration.
//!
//! A TOML file may name the data directory and the two dataset files:
//!
//! ```toml
//! data_dir = "public/data"
//! altitude_file = "Postcode_elevation.csv"
//! wind_file = "vbpostcode.csv"
//! ```
//!
//! Missing keys take their defaults. Relative file names resolve against
//! `data_dir`; absolute ones are used as given.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wind_datasets::{DEFAULT_ALTITUDE_FILE, DEFAULT_WIND_FILE, FileDatasetSource};

/// Data directory used when neither the config nor the command line names one.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the altitude and wind datasets live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub altitude_file: PathBuf,
    pub wind_file: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            altitude_file: PathBuf::from(DEFAULT_ALTITUDE_FILE),
            wind_file: PathBuf::from(DEFAULT_WIND_FILE),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetOverrides {
    pub data_dir: Option<PathBuf>,
    pub altitude_file: Option<PathBuf>,
    pub wind_file: Option<PathBuf>,
}

impl DatasetConfig {
    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &DatasetOverrides) -> Self {
        if let Some(dir) = &overrides.data_dir {
            self.data_dir.clone_from(dir);
        }
        if let Some(file) = &overrides.altitude_file {
            self.altitude_file.clone_from(file);
        }
        if let Some(file) = &overrides.wind_file {
            self.wind_file.clone_from(file);
        }
        self
    }

    pub fn altitude_path(&self) -> PathBuf {
        self.data_dir.join(&self.altitude_file)
    }

    pub fn wind_path(&self) -> PathBuf {
        self.data_dir.join(&self.wind_file)
    }

    /// File source reading both datasets.
    pub fn source(&self) -> FileDatasetSource {
        FileDatasetSource::new(self.altitude_path(), self.wind_path())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_point_at_standard_files() {
        let config = DatasetConfig::default();
        assert_eq!(config.altitude_path(), Path::new("data/Postcode_elevation.csv"));
        assert_eq!(config.wind_path(), Path::new("data/vbpostcode.csv"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "data_dir = \"public/data\"").expect("write");
        let config = DatasetConfig::load_from(file.path()).expect("config");
        assert_eq!(config.data_dir, PathBuf::from("public/data"));
        assert_eq!(config.wind_file, PathBuf::from(DEFAULT_WIND_FILE));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "dataset_dir = \"x\"").expect("write");
        let error = DatasetConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Toml { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let error = DatasetConfig::load_from(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains("absent.toml"));
    }

    #[test]
    fn overrides_win_and_absolute_files_stay_absolute() {
        let dir = tempfile::tempdir().expect("temp dir");
        let wind = dir.path().join("wind.csv");
        let config = DatasetConfig::default().with_overrides(&DatasetOverrides {
            data_dir: Some(PathBuf::from("other")),
            altitude_file: None,
            wind_file: Some(wind.clone()),
        });
        assert_eq!(config.altitude_path(), Path::new("other/Postcode_elevation.csv"));
        assert_eq!(config.wind_path(), wind);
    }
}
