//! Basic wind derivation from the map speed and site factors.

use serde::{Deserialize, Serialize};

use crate::altitude::{C_DIR, altitude_factor, reference_height};
use crate::duration::{DurationCategory, validate_month};
use crate::error::{FactorError, Result};
use crate::tables::{probability_factor, season_factor};

/// Pressure coefficient `ρ/2` in Pa per (m/s)², giving `q = 0.613·v²`.
pub const AIR_DENSITY_COEFFICIENT: f64 = 0.613;

/// Inputs to factor derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorRequest {
    pub installation_month: Option<u8>,
    /// Duration category id such as `UNDER_4_MONTHS`.
    pub duration_category: Option<String>,
    /// Site altitude in metres; missing counts as 0.
    #[serde(rename = "altitude_m")]
    pub altitude_m: Option<f64>,
    /// Reference height in metres; missing counts as 10.
    #[serde(rename = "referenceHeight_m")]
    pub reference_height_m: Option<f64>,
    /// Map basic wind speed in m/s. Without it only the factors are derived.
    #[serde(rename = "vbMap_ms")]
    pub vb_map_ms: Option<f64>,
}

impl FactorRequest {
    pub fn new(installation_month: u8, duration_category: impl Into<String>) -> Self {
        Self {
            installation_month: Some(installation_month),
            duration_category: Some(duration_category.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = Some(altitude_m);
        self
    }

    #[must_use]
    pub fn with_reference_height(mut self, reference_height_m: f64) -> Self {
        self.reference_height_m = Some(reference_height_m);
        self
    }

    #[must_use]
    pub fn with_map_speed(mut self, vb_map_ms: f64) -> Self {
        self.vb_map_ms = Some(vb_map_ms);
        self
    }
}

/// Derived design factors and, when a map speed was given, the basic wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindFactors {
    pub return_period_years: u32,
    pub c_prob: f64,
    pub c_season: f64,
    pub c_alt: f64,
    pub c_dir: f64,
    #[serde(rename = "vb_ms")]
    pub vb_ms: Option<f64>,
    #[serde(rename = "qb_kpa")]
    pub qb_kpa: Option<f64>,
}

impl WindFactors {
    /// Product of all multipliers applied to the map speed.
    pub fn combined(&self) -> f64 {
        self.c_alt * self.c_dir * self.c_season * self.c_prob
    }
}

/// Basic wind speed and pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicWind {
    pub vb_ms: f64,
    pub qb_kpa: f64,
}

/// Pressure in kPa for a speed in m/s using the air density coefficient.
pub fn peak_pressure_kpa(speed_ms: f64) -> f64 {
    AIR_DENSITY_COEFFICIENT * speed_ms * speed_ms / 1000.0
}

/// Applies the factors to a map speed.
///
/// Returns `None` when the map speed is not a positive finite number.
pub fn compute_basic_wind(vb_map_ms: f64, factors: &WindFactors) -> Option<BasicWind> {
    if !vb_map_ms.is_finite() || vb_map_ms <= 0.0 {
        return None;
    }
    let vb_ms = vb_map_ms * factors.combined();
    Some(BasicWind {
        vb_ms,
        qb_kpa: peak_pressure_kpa(vb_ms),
    })
}

/// Derives the wind factors for a request.
///
/// Month and duration are both required; neither is defaulted.
pub fn derive_wind_factors(request: &FactorRequest) -> Result<WindFactors> {
    let month = request
        .installation_month
        .ok_or(FactorError::MissingInstallationMonth)?;
    let month = validate_month(month)?;
    let duration: DurationCategory = request
        .duration_category
        .as_deref()
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .ok_or(FactorError::MissingDurationCategory)?
        .parse()?;

    let return_period_years = duration.return_period_years();
    let altitude_m = request.altitude_m.unwrap_or(0.0);
    let height_m = reference_height(request.reference_height_m.unwrap_or(f64::NAN));

    let mut factors = WindFactors {
        return_period_years,
        c_prob: probability_factor(return_period_years)?,
        c_season: season_factor(month, duration)?,
        c_alt: altitude_factor(altitude_m, height_m),
        c_dir: C_DIR,
        vb_ms: None,
        qb_kpa: None,
    };

    if let Some(vb_map_ms) = request.vb_map_ms {
        let basic = compute_basic_wind(vb_map_ms, &factors)
            .ok_or(FactorError::InvalidMapSpeed(vb_map_ms))?;
        factors.vb_ms = Some(basic.vb_ms);
        factors.qb_kpa = Some(basic.qb_kpa);
    }

    tracing::debug!(
        month,
        %duration,
        return_period_years,
        c_prob = factors.c_prob,
        c_season = factors.c_season,
        c_alt = factors.c_alt,
        "Derived wind factors"
    );
    Ok(factors)
}
