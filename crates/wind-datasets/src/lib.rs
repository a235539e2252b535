//! Postcode datasets: indexing, lookup and caching.
//!
//! Two reference datasets feed the lookups: postcode altitudes and postcode
//! wind measures. Both are parsed from loosely structured text, their columns
//! inferred by `wind-map`, and stored in postcode-keyed indices.
//!
//! # Modules
//!
//! - [`index`]: building the altitude (full key) and wind (sector key) indices
//! - [`lookup`]: progressive key narrowing
//! - [`fallback`]: deterministic wind estimate when nothing matches
//! - [`site`]: form-facing lookup results with status and sources
//! - [`cache`]: build-once, shared, retryable dataset cache
//! - [`source`]: where dataset text comes from
//!
//! # Example
//!
//! ```
//! use wind_datasets::{build_datasets, lookup_datasets};
//!
//! let datasets = build_datasets("Postcode,Alt\nSW1A1AA,20\n", "Postcode,Speed\nSW1A,25\n");
//! let lookup = lookup_datasets(&datasets, "SW1A 1AA");
//! assert_eq!(lookup.altitude, Some(20.0));
//! assert_eq!(lookup.wind.map(|w| w.speed_ms), Some(25.0));
//! ```

pub mod cache;
pub mod error;
pub mod fallback;
pub mod index;
pub mod lookup;
pub mod site;
pub mod source;

// === Error Types ===
pub use error::{DatasetError, Result};

// === Indices ===
pub use index::{
    AltitudeIndex, DatasetIndex, Datasets, WindIndex, build_altitude_index, build_datasets,
    build_wind_index,
};

// === Lookup ===
pub use fallback::{FALLBACK_PRESSURE_CAP_KPA, compute_fallback_wind};
pub use lookup::{DatasetLookup, find_best_record, lookup_datasets};
pub use site::{LookupSources, LookupStatus, SiteLookup, resolve_site};

// === Cache ===
pub use cache::{BuildResult, DatasetCache};
pub use source::{
    DEFAULT_ALTITUDE_FILE, DEFAULT_WIND_FILE, DatasetKind, DatasetSource, DatasetTexts,
    FileDatasetSource, StaticDatasetSource,
};
