//! Postcode checks run through the shared dataset cache.

use wind_datasets::{DatasetCache, LookupStatus, SiteLookup};
use wind_factors::{DesignWind, DurationCategory, design_wind, month_label, validate_month};
use wind_model::{SiteInputs, TerrainCategory};

/// Month and duration the design factors are derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignBasis {
    pub month: u8,
    pub duration: DurationCategory,
}

impl DesignBasis {
    /// Validates a month and a duration category id.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is outside 1..=12 or the duration is not
    /// a known category id.
    pub fn parse(month: u8, duration: &str) -> wind_factors::Result<Self> {
        Ok(Self {
            month: validate_month(month)?,
            duration: duration.trim().parse()?,
        })
    }

    /// `May, Under 4 months (5-year return period)`.
    pub fn describe(&self) -> String {
        let month = month_label(self.month).unwrap_or("Unknown month");
        format!(
            "{month}, {} ({}-year return period)",
            self.duration.label(),
            self.duration.return_period_years()
        )
    }
}

/// Site settings shared by every postcode in a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    /// Without a basis only the lookup is reported.
    pub basis: Option<DesignBasis>,
    pub fence_height_m: Option<f64>,
    pub altitude_override_m: Option<f64>,
    pub terrain: TerrainCategory,
}

impl CheckOptions {
    fn site_inputs(&self, postcode: &str) -> SiteInputs {
        SiteInputs {
            altitude_override_m: self.altitude_override_m,
            fence_height_m: self.fence_height_m,
            terrain_category: self.terrain,
            installation_month: self.basis.map(|basis| basis.month),
            duration_category: self.basis.map(|basis| basis.duration.id().to_string()),
            ..SiteInputs::new(postcode)
        }
    }
}

/// Result of checking one postcode.
#[derive(Debug, Clone, PartialEq)]
pub struct PostcodeCheck {
    /// Postcode as typed.
    pub input: String,
    pub site: SiteLookup,
    pub design: Option<DesignWind>,
}

impl PostcodeCheck {
    /// True when nothing usable was left after normalization.
    pub fn is_invalid(&self) -> bool {
        self.site.status == LookupStatus::Idle
    }
}

/// Looks one postcode up and, with a design basis, derives its design wind.
///
/// # Errors
///
/// Returns an error if factor derivation rejects the inputs.
pub async fn check_postcode(
    cache: &DatasetCache,
    postcode: &str,
    options: &CheckOptions,
) -> wind_factors::Result<PostcodeCheck> {
    let site = cache.lookup(postcode).await;
    let design = match (&options.basis, &site.wind) {
        (Some(_), Some(wind)) => Some(design_wind(
            wind,
            &options.site_inputs(postcode),
            site.altitude,
        )?),
        _ => None,
    };
    tracing::debug!(
        postcode,
        status = site.status.as_str(),
        fallback = site.uses_fallback_wind(),
        "Checked postcode"
    );
    Ok(PostcodeCheck {
        input: postcode.to_string(),
        site,
        design,
    })
}

/// Checks postcodes in order.
pub async fn check_postcodes(
    cache: &DatasetCache,
    postcodes: &[String],
    options: &CheckOptions,
) -> wind_factors::Result<Vec<PostcodeCheck>> {
    let mut checks = Vec::with_capacity(postcodes.len());
    for postcode in postcodes {
        checks.push(check_postcode(cache, postcode, options).await?);
    }
    Ok(checks)
}
