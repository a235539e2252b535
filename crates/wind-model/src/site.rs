//! Project inputs supplied by the form layer.

use serde::{Deserialize, Serialize};

use crate::terrain::TerrainCategory;

/// Site and project metadata for one design query.
///
/// Optional fields stay `None` until the user provides them; nothing here is
/// defaulted silently except the terrain category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInputs {
    pub postcode: String,
    #[serde(default, rename = "distanceToSea_km")]
    pub distance_to_sea_km: Option<f64>,
    /// Manual altitude override in metres AOD.
    #[serde(default, rename = "altitude_mAOD")]
    pub altitude_override_m: Option<f64>,
    #[serde(default, rename = "fenceHeight_m")]
    pub fence_height_m: Option<f64>,
    #[serde(default)]
    pub terrain_category: TerrainCategory,
    /// Roughness override; the category's z0 applies when absent.
    #[serde(default, rename = "terrainRoughness_z0_m")]
    pub terrain_roughness_z0_m: Option<f64>,
    /// Installation month, 1–12.
    #[serde(default)]
    pub installation_month: Option<u8>,
    /// Duration category id such as `UNDER_4_MONTHS`.
    #[serde(default)]
    pub duration_category: Option<String>,
}

impl SiteInputs {
    pub fn new(postcode: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            ..Self::default()
        }
    }

    /// Roughness length in effect for the site.
    pub fn roughness_z0_m(&self) -> f64 {
        self.terrain_roughness_z0_m
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or_else(|| self.terrain_category.roughness_z0_m())
    }

    /// Altitude used for design: manual override first, then the dataset value.
    pub fn effective_altitude(&self, dataset_altitude: Option<f64>) -> Option<f64> {
        self.altitude_override_m
            .filter(|value| value.is_finite())
            .or(dataset_altitude.filter(|value| value.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_form_payload() {
        let json = r#"{
            "postcode": "SW1A 1AA",
            "distanceToSea_km": 12.5,
            "fenceHeight_m": 2.0,
            "terrainCategory": "II",
            "installationMonth": 5,
            "durationCategory": "UNDER_4_MONTHS"
        }"#;
        let inputs: SiteInputs = serde_json::from_str(json).expect("parse inputs");
        assert_eq!(inputs.postcode, "SW1A 1AA");
        assert_eq!(inputs.distance_to_sea_km, Some(12.5));
        assert_eq!(inputs.terrain_category, TerrainCategory::LowVegetation);
        assert_eq!(inputs.installation_month, Some(5));
        assert_eq!(inputs.duration_category.as_deref(), Some("UNDER_4_MONTHS"));
        assert_eq!(inputs.altitude_override_m, None);
        assert_eq!(inputs.roughness_z0_m(), 0.05);
    }

    #[test]
    fn override_altitude_wins() {
        let mut inputs = SiteInputs::new("SW1A1AA");
        assert_eq!(inputs.effective_altitude(Some(20.0)), Some(20.0));
        inputs.altitude_override_m = Some(55.0);
        assert_eq!(inputs.effective_altitude(Some(20.0)), Some(55.0));
        inputs.altitude_override_m = Some(f64::NAN);
        assert_eq!(inputs.effective_altitude(None), None);
    }

    #[test]
    fn roughness_override_must_be_positive() {
        let mut inputs = SiteInputs::new("SW1A1AA");
        inputs.terrain_roughness_z0_m = Some(0.0);
        assert_eq!(inputs.roughness_z0_m(), 0.3);
        inputs.terrain_roughness_z0_m = Some(0.7);
        assert_eq!(inputs.roughness_z0_m(), 0.7);
    }
}
