//! Altitude and direction factors.

/// Direction factor, applied uniformly.
pub const C_DIR: f64 = 1.0;

/// Reference height used when none is given.
pub const DEFAULT_REFERENCE_HEIGHT_M: f64 = 10.0;

const ALTITUDE_COEFFICIENT: f64 = 0.001;
const HEIGHT_DECAY_EXPONENT: f64 = 0.2;

/// Altitude factor of the UK National Annex (NA.2a / NA.2b).
///
/// `1 + 0.001·A` up to a reference height of 10 m, `1 + 0.001·A·(10/z)^0.2`
/// above it. Altitudes below sea level count as 0 and a missing or
/// non-positive reference height counts as 10 m, so the factor is never
/// below 1.
pub fn altitude_factor(altitude_m: f64, reference_height_m: f64) -> f64 {
    let altitude = if altitude_m.is_finite() {
        altitude_m.max(0.0)
    } else {
        0.0
    };
    let height = reference_height(reference_height_m);
    if height <= DEFAULT_REFERENCE_HEIGHT_M {
        1.0 + ALTITUDE_COEFFICIENT * altitude
    } else {
        1.0 + ALTITUDE_COEFFICIENT
            * altitude
            * (DEFAULT_REFERENCE_HEIGHT_M / height).powf(HEIGHT_DECAY_EXPONENT)
    }
}

/// Reference height in metres, defaulting to 10 m for unusable input.
pub fn reference_height(height_m: f64) -> f64 {
    if height_m.is_finite() && height_m > 0.0 {
        height_m
    } else {
        DEFAULT_REFERENCE_HEIGHT_M
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn low_structures_use_linear_form() {
        assert!(approx(altitude_factor(0.0, 2.0), 1.0));
        assert!(approx(altitude_factor(100.0, 2.0), 1.1));
        assert!(approx(altitude_factor(250.0, 10.0), 1.25));
    }

    #[test]
    fn taller_structures_decay_with_height() {
        let expected = 1.0 + 0.1 * 0.5_f64.powf(0.2);
        assert!(approx(altitude_factor(100.0, 20.0), expected));
        assert!(altitude_factor(100.0, 20.0) < altitude_factor(100.0, 10.0));
    }

    #[test]
    fn unusable_inputs_fall_back() {
        assert!(approx(altitude_factor(-30.0, 2.0), 1.0));
        assert!(approx(altitude_factor(f64::NAN, 2.0), 1.0));
        assert!(approx(altitude_factor(100.0, 0.0), 1.1));
        assert!(approx(altitude_factor(100.0, f64::INFINITY), 1.1));
        assert_eq!(reference_height(-1.0), 10.0);
        assert_eq!(reference_height(2.5), 2.5);
    }
}
