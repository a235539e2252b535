//! Schema inference for postcode datasets.
//!
//! Given a [`wind_ingest::RawTable`] with unknown headers, this crate decides
//! which column holds each [`SemanticField`] and how its values convert to SI
//! units.
//!
//! # Example
//!
//! ```
//! use wind_ingest::parse_table;
//! use wind_map::{SchemaResolver, SemanticField};
//!
//! let table = parse_table("Postcode,Elevation (m)\nSW1A 1AA,20\n");
//! let resolver = SchemaResolver::new(&table);
//! let altitude = resolver.resolve(SemanticField::Altitude).unwrap();
//! assert_eq!(altitude.index, 1);
//! ```

pub mod field;
pub mod plausibility;
pub mod resolver;
pub mod units;

pub use field::{FieldProfile, SemanticField};
pub use plausibility::{
    looks_like_altitude, looks_like_postcode, looks_like_pressure, looks_like_speed, parse_number,
    unit_suffix,
};
pub use resolver::{
    ColumnMatch, MIN_HIT_RATIO, MatchStrength, SAMPLE_LIMIT, SampleCount, SchemaResolver,
    TokenMatch, count_valid_samples, find_token_match, normalize_header,
};
pub use units::{
    PressureUnit, SpeedUnit, WIND_PRESSURE_COEFFICIENT, complete_wind_pair, pressure_from_speed,
    round3, speed_from_pressure,
};
