//! Display formatting for wind quantities.
//!
//! Non-finite values render as an en dash so reports never show `NaN`.

const MISSING: &str = "–";

/// `23 m/s`, `22.5 m/s` (rounded to one decimal, integer form when whole).
pub fn format_wind_speed(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    format!("{} m/s", one_decimal(value))
}

/// `0.149 kPa`.
pub fn format_pressure(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    format!("{value:.3} kPa")
}

/// Three decimals below 0.01 m, two otherwise.
pub fn format_roughness(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    if value < 0.01 {
        format!("{value:.3} m")
    } else {
        format!("{value:.2} m")
    }
}

/// Two decimals.
pub fn format_factor(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    format!("{value:.2}")
}

/// `20 m AOD`, `20.5 m AOD`; `None` when there is nothing to show.
pub fn format_altitude(value: Option<f64>) -> Option<String> {
    let value = value.filter(|value| value.is_finite())?;
    Some(format!("{} m AOD", one_decimal(value)))
}

fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_speed_drops_trailing_zero() {
        assert_eq!(format_wind_speed(23.0), "23 m/s");
        assert_eq!(format_wind_speed(22.46), "22.5 m/s");
        assert_eq!(format_wind_speed(f64::NAN), "–");
    }

    #[test]
    fn pressure_uses_three_decimals() {
        assert_eq!(format_pressure(0.149), "0.149 kPa");
        assert_eq!(format_pressure(f64::INFINITY), "–");
    }

    #[test]
    fn roughness_precision_depends_on_size() {
        assert_eq!(format_roughness(0.003), "0.003 m");
        assert_eq!(format_roughness(0.3), "0.30 m");
    }

    #[test]
    fn factor_and_altitude() {
        assert_eq!(format_factor(0.875), "0.88");
        assert_eq!(format_altitude(Some(20.0)).as_deref(), Some("20 m AOD"));
        assert_eq!(format_altitude(Some(20.54)).as_deref(), Some("20.5 m AOD"));
        assert_eq!(format_altitude(None), None);
    }
}
