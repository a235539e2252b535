//! Probability and seasonal factor tables.

use crate::duration::{DurationCategory, validate_month};
use crate::error::{FactorError, Result};

/// Column of the seasonal factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonColumn {
    /// Up to one month.
    M1,
    /// Up to two months.
    M2,
    /// Up to four months.
    M4,
}

impl SeasonColumn {
    const fn index(self) -> usize {
        match self {
            Self::M1 => 0,
            Self::M2 => 1,
            Self::M4 => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "m1",
            Self::M2 => "m2",
            Self::M4 => "m4",
        }
    }
}

/// Probability factor by return period in years.
pub const C_PROB: [(u32, f64); 4] = [(2, 0.82), (5, 0.88), (10, 0.93), (50, 1.0)];

/// Seasonal factor by installation month (row 0 is January), columns `m1`,
/// `m2`, `m4`.
pub const C_SEASON: [[f64; 3]; 12] = [
    [0.98, 0.98, 0.98],
    [0.83, 0.86, 0.87],
    [0.82, 0.83, 0.83],
    [0.75, 0.75, 0.76],
    [0.69, 0.71, 0.73],
    [0.66, 0.67, 0.83],
    [0.62, 0.71, 0.86],
    [0.71, 0.82, 0.90],
    [0.82, 0.85, 0.96],
    [0.82, 0.89, 1.0],
    [0.88, 0.95, 1.0],
    [0.94, 1.0, 1.0],
];

pub fn probability_factor(return_period_years: u32) -> Result<f64> {
    C_PROB
        .iter()
        .find(|(period, _)| *period == return_period_years)
        .map(|&(_, factor)| factor)
        .ok_or(FactorError::UnsupportedReturnPeriod(return_period_years))
}

/// Seasonal factor for an installation month and duration.
///
/// Durations without a seasonal column use 1.0. The month must be 1..=12
/// either way.
pub fn season_factor(month: u8, duration: DurationCategory) -> Result<f64> {
    let month = validate_month(month)?;
    Ok(duration.season_column().map_or(1.0, |column| {
        C_SEASON[usize::from(month) - 1][column.index()]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_table() {
        assert_eq!(probability_factor(2), Ok(0.82));
        assert_eq!(probability_factor(5), Ok(0.88));
        assert_eq!(probability_factor(10), Ok(0.93));
        assert_eq!(probability_factor(50), Ok(1.0));
        assert_eq!(probability_factor(20), Err(FactorError::UnsupportedReturnPeriod(20)));
    }

    #[test]
    fn seasonal_lookup() {
        assert_eq!(season_factor(5, DurationCategory::Under4Months), Ok(0.73));
        assert_eq!(season_factor(7, DurationCategory::Under1Month), Ok(0.62));
        assert_eq!(season_factor(12, DurationCategory::Under2Months), Ok(1.0));
        assert_eq!(season_factor(1, DurationCategory::Under4Months), Ok(0.98));
    }

    #[test]
    fn non_seasonal_durations_use_unity() {
        for duration in [
            DurationCategory::Under3Days,
            DurationCategory::UnderAYear,
            DurationCategory::OverAYear,
        ] {
            assert_eq!(season_factor(7, duration), Ok(1.0));
        }
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(
            season_factor(0, DurationCategory::Under1Month),
            Err(FactorError::InvalidMonth(0))
        );
        assert_eq!(
            season_factor(13, DurationCategory::OverAYear),
            Err(FactorError::InvalidMonth(13))
        );
    }

    #[test]
    fn seasonal_factors_never_exceed_unity() {
        assert!(C_SEASON.iter().flatten().all(|&factor| factor > 0.0 && factor <= 1.0));
    }
}
