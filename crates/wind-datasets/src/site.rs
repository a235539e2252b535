//! Site lookups as presented to the form layer.

use serde::Serialize;
use wind_model::{PostcodeKey, WindResult};

use crate::fallback::compute_fallback_wind;
use crate::index::Datasets;
use crate::lookup::lookup_datasets;

/// Progress of a site lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// No postcode entered.
    Idle,
    /// Datasets are still loading; wind is the fallback estimate.
    Pending,
    /// Datasets are loaded and were consulted.
    Ready,
    /// Datasets failed to load; wind is the fallback estimate.
    Unavailable,
}

impl LookupStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Dataset spellings of the postcodes that matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupSources {
    pub altitude: Option<String>,
    pub wind: Option<String>,
}

/// Wind and altitude for a site postcode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLookup {
    pub wind: Option<WindResult>,
    /// Dataset altitude in metres; there is no altitude fallback.
    pub altitude: Option<f64>,
    pub status: LookupStatus,
    pub sources: LookupSources,
}

impl SiteLookup {
    /// Lookup for a postcode whose datasets could not be loaded.
    pub fn unavailable(postcode: &str) -> Self {
        Self::fallback_only(postcode, LookupStatus::Unavailable)
    }

    fn idle() -> Self {
        Self {
            wind: None,
            altitude: None,
            status: LookupStatus::Idle,
            sources: LookupSources::default(),
        }
    }

    fn fallback_only(postcode: &str, status: LookupStatus) -> Self {
        Self {
            wind: compute_fallback_wind(postcode),
            altitude: None,
            status,
            sources: LookupSources::default(),
        }
    }

    /// True when the wind figure came from the fallback estimate.
    pub fn uses_fallback_wind(&self) -> bool {
        self.wind.as_ref().is_some_and(|wind| !wind.is_dataset())
    }
}

/// Resolves a site postcode against loaded datasets, if any.
///
/// With datasets present the dataset wind is used when one matches and the
/// fallback estimate otherwise. Without datasets the lookup is `Pending`.
pub fn resolve_site(datasets: Option<&Datasets>, postcode: &str) -> SiteLookup {
    if PostcodeKey::full(postcode).is_empty() {
        return SiteLookup::idle();
    }
    let Some(datasets) = datasets else {
        return SiteLookup::fallback_only(postcode, LookupStatus::Pending);
    };

    let lookup = lookup_datasets(datasets, postcode);
    let sources = LookupSources {
        altitude: lookup.altitude_match,
        wind: lookup.wind.as_ref().map(|wind| wind.match_text.clone()),
    };
    SiteLookup {
        wind: lookup.wind.or_else(|| compute_fallback_wind(postcode)),
        altitude: lookup.altitude,
        status: LookupStatus::Ready,
        sources,
    }
}
