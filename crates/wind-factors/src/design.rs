//! Design wind for a site: map wind, site factors and terrain together.

use serde::Serialize;
use wind_model::{SiteInputs, TerrainCategory, WindResult};

use crate::altitude::reference_height;
use crate::basic::{FactorRequest, WindFactors, derive_wind_factors, peak_pressure_kpa};
use crate::error::{FactorError, Result};

/// Wind at the map level, before site factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseWind {
    /// Speed reported by the lookup.
    pub speed_ms: f64,
    /// Basic pressure of the map speed, `0.613·vb_map²` in kPa.
    ///
    /// Uses the same coefficient as the factored [`DesignWind::pressure_kpa`].
    /// The lookup's [`WindResult::pressure_kpa`] comes from the dataset's
    /// own pressure column (or `0.0005·v²` when derived) and can differ.
    pub pressure_kpa: f64,
    pub vb_map_ms: f64,
}

/// Final design values for a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignWind {
    pub base: BaseWind,
    pub factors: WindFactors,
    /// Basic wind speed after factors, in m/s.
    pub speed_ms: f64,
    /// Basic wind pressure after factors, in kPa.
    pub pressure_kpa: f64,
    pub altitude_m: f64,
    pub reference_height_m: f64,
    pub terrain: TerrainCategory,
    pub roughness_z0_m: f64,
}

/// Map speed of a wind result: `vb_map` when usable, else the speed.
pub fn map_speed(wind: &WindResult) -> Option<f64> {
    [wind.vb_map, wind.speed_ms]
        .into_iter()
        .find(|speed| speed.is_finite())
}

/// Combines a looked-up wind with the site inputs.
///
/// Altitude is the manual override, else the dataset altitude, else 0.
/// Reference height is the fence height when positive, else 10 m.
pub fn design_wind(
    wind: &WindResult,
    site: &SiteInputs,
    dataset_altitude: Option<f64>,
) -> Result<DesignWind> {
    let vb_map_ms = map_speed(wind).ok_or(FactorError::InvalidMapSpeed(wind.vb_map))?;
    let altitude_m = site.effective_altitude(dataset_altitude).unwrap_or(0.0);
    let reference_height_m = reference_height(site.fence_height_m.unwrap_or(f64::NAN));

    let request = FactorRequest {
        installation_month: site.installation_month,
        duration_category: site.duration_category.clone(),
        altitude_m: Some(altitude_m),
        reference_height_m: Some(reference_height_m),
        vb_map_ms: Some(vb_map_ms),
    };
    let factors = derive_wind_factors(&request)?;
    let (Some(speed_ms), Some(pressure_kpa)) = (factors.vb_ms, factors.qb_kpa) else {
        return Err(FactorError::InvalidMapSpeed(vb_map_ms));
    };

    Ok(DesignWind {
        base: BaseWind {
            speed_ms: wind.speed_ms,
            pressure_kpa: peak_pressure_kpa(vb_map_ms),
            vb_map_ms,
        },
        factors,
        speed_ms,
        pressure_kpa,
        altitude_m,
        reference_height_m,
        terrain: site.terrain_category,
        roughness_z0_m: site.roughness_z0_m(),
    })
}
