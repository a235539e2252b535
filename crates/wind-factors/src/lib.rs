//! Wind load factors after the UK National Annex to EN 1991-1-4.
//!
//! The basic wind speed is the map speed scaled by four factors:
//!
//! ```text
//! vb = vb_map · c_alt · c_dir · c_season · c_prob
//! qb = 0.613 · vb² / 1000   (kPa)
//! ```
//!
//! `c_prob` follows from the return period implied by the exposure duration,
//! `c_season` from the installation month for sub-year durations, and `c_alt`
//! from site altitude and reference height.
//!
//! # Example
//!
//! ```
//! use wind_factors::{FactorRequest, derive_wind_factors};
//!
//! let factors = derive_wind_factors(&FactorRequest::new(5, "UNDER_4_MONTHS")).unwrap();
//! assert_eq!(factors.return_period_years, 5);
//! assert_eq!(factors.c_season, 0.73);
//! ```

pub mod altitude;
pub mod basic;
pub mod design;
pub mod duration;
pub mod error;
pub mod tables;

// === Error Types ===
pub use error::{FactorError, Result};

// === Factors ===
pub use altitude::{C_DIR, DEFAULT_REFERENCE_HEIGHT_M, altitude_factor, reference_height};
pub use basic::{
    AIR_DENSITY_COEFFICIENT, BasicWind, FactorRequest, WindFactors, compute_basic_wind,
    derive_wind_factors, peak_pressure_kpa,
};
pub use duration::{
    DurationCategory, MONTH_LABELS, duration_label, map_duration_to_return_period, month_label,
    validate_month,
};
pub use tables::{C_PROB, C_SEASON, SeasonColumn, probability_factor, season_factor};

// === Design ===
pub use design::{BaseWind, DesignWind, design_wind, map_speed};
