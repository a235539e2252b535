//! Error types for wind factor derivation.

use thiserror::Error;

/// Caller contract violations when deriving factors.
///
/// These are never defaulted away: a missing or unsupported input is
/// reported to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactorError {
    /// Duration category id is not one of the supported categories.
    #[error("unsupported duration category: {0}")]
    UnsupportedDuration(String),

    #[error("installation month is required")]
    MissingInstallationMonth,

    #[error("duration category is required")]
    MissingDurationCategory,

    /// Installation month outside 1..=12.
    #[error("invalid installation month: {0}")]
    InvalidMonth(u8),

    /// No probability factor is tabulated for this return period.
    #[error("unsupported return period: {0} years")]
    UnsupportedReturnPeriod(u32),

    /// Map wind speed is not a positive finite number.
    #[error("invalid map wind speed: {0}")]
    InvalidMapSpeed(f64),
}

/// Result type for factor derivation.
pub type Result<T> = std::result::Result<T, FactorError>;
