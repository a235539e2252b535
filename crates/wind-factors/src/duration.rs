//! Exposure durations and installation months.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FactorError, Result};
use crate::tables::SeasonColumn;

/// How long a temporary structure stays installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationCategory {
    #[serde(rename = "UNDER_3_DAYS")]
    Under3Days,
    #[serde(rename = "UNDER_1_MONTH")]
    Under1Month,
    #[serde(rename = "UNDER_2_MONTHS")]
    Under2Months,
    #[serde(rename = "UNDER_4_MONTHS")]
    Under4Months,
    UnderAYear,
    OverAYear,
}

impl DurationCategory {
    pub const ALL: [Self; 6] = [
        Self::Under3Days,
        Self::Under1Month,
        Self::Under2Months,
        Self::Under4Months,
        Self::UnderAYear,
        Self::OverAYear,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Under3Days => "UNDER_3_DAYS",
            Self::Under1Month => "UNDER_1_MONTH",
            Self::Under2Months => "UNDER_2_MONTHS",
            Self::Under4Months => "UNDER_4_MONTHS",
            Self::UnderAYear => "UNDER_A_YEAR",
            Self::OverAYear => "OVER_A_YEAR",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under3Days => "Under 3 days",
            Self::Under1Month => "Under 1 month",
            Self::Under2Months => "Under 2 months",
            Self::Under4Months => "Under 4 months",
            Self::UnderAYear => "Under a year",
            Self::OverAYear => "Over a year",
        }
    }

    /// Design return period in years.
    pub const fn return_period_years(self) -> u32 {
        match self {
            Self::Under3Days => 2,
            Self::Under1Month | Self::Under2Months | Self::Under4Months => 5,
            Self::UnderAYear => 10,
            Self::OverAYear => 50,
        }
    }

    /// Seasonal table column, for the sub-year durations that have one.
    pub const fn season_column(self) -> Option<SeasonColumn> {
        match self {
            Self::Under1Month => Some(SeasonColumn::M1),
            Self::Under2Months => Some(SeasonColumn::M2),
            Self::Under4Months => Some(SeasonColumn::M4),
            Self::Under3Days | Self::UnderAYear | Self::OverAYear => None,
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DurationCategory {
    type Err = FactorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| FactorError::UnsupportedDuration(s.to_string()))
    }
}

/// Return period in years for a duration category id.
pub fn map_duration_to_return_period(category: &str) -> Result<u32> {
    category
        .parse::<DurationCategory>()
        .map(DurationCategory::return_period_years)
}

/// Display label for a duration category id, if it is known.
pub fn duration_label(category: &str) -> Option<&'static str> {
    category
        .parse::<DurationCategory>()
        .ok()
        .map(DurationCategory::label)
}

pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month name for 1..=12.
pub fn month_label(month: u8) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    MONTH_LABELS.get(index).copied()
}

/// Checks an installation month is within 1..=12.
pub fn validate_month(month: u8) -> Result<u8> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(FactorError::InvalidMonth(month))
    }
}
