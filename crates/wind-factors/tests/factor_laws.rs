//! Properties of the factor derivation across all inputs.

use proptest::prelude::*;
use wind_factors::{
    DurationCategory, FactorRequest, altitude_factor, derive_wind_factors, season_factor,
};

fn duration() -> impl Strategy<Value = DurationCategory> {
    prop::sample::select(DurationCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn altitude_factor_is_at_least_one(altitude in -500.0f64..3000.0, height in -5.0f64..200.0) {
        prop_assert!(altitude_factor(altitude, height) >= 1.0);
    }

    #[test]
    fn altitude_factor_grows_with_altitude(low in 0.0f64..1000.0, extra in 0.0f64..1000.0, height in 0.5f64..50.0) {
        prop_assert!(altitude_factor(low + extra, height) >= altitude_factor(low, height));
    }

    #[test]
    fn every_valid_month_and_duration_derives(month in 1u8..=12, duration in duration()) {
        let request = FactorRequest::new(month, duration.id()).with_map_speed(22.0);
        let factors = derive_wind_factors(&request).expect("valid inputs");
        prop_assert_eq!(factors.return_period_years, duration.return_period_years());
        prop_assert_eq!(factors.c_season, season_factor(month, duration).expect("season"));
        let vb = factors.vb_ms.expect("vb");
        prop_assert!(vb > 0.0 && vb <= 22.0);
    }
}

#[test]
fn long_exposure_keeps_map_speed() {
    let request = FactorRequest::new(8, "OVER_A_YEAR").with_map_speed(24.5);
    let factors = derive_wind_factors(&request).expect("factors");
    assert_eq!(factors.vb_ms, Some(24.5));
}
