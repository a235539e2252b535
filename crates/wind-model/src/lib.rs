//! Shared value types for postcode wind lookups.
//!
//! # Modules
//!
//! - [`postcode`]: normalization, sector keys and display formatting
//! - [`record`]: dataset index records
//! - [`wind`]: wind results and their provenance
//! - [`terrain`]: terrain categories and roughness lengths
//! - [`site`]: project inputs from the form layer
//! - [`format`]: display helpers

pub mod format;
pub mod postcode;
pub mod record;
pub mod site;
pub mod terrain;
pub mod wind;

pub use format::{
    format_altitude, format_factor, format_pressure, format_roughness, format_wind_speed,
};
pub use postcode::{
    PostcodeKey, format_postcode, is_valid_uk_postcode, normalize_postcode, postcode_sector,
};
pub use record::{IndexRecord, MatchedRecord, WindMeasure};
pub use site::SiteInputs;
pub use terrain::{TerrainCategory, UnknownTerrainCategory};
pub use wind::{WindResult, WindSource};
