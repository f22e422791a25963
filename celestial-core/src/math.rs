/// Angular separation on the unit sphere from the Vincenty formula.
///
/// Takes the sine and cosine of both latitudes and the longitude difference
/// in radians; returns the separation in radians. Well conditioned at every
/// separation, including coincident and antipodal points.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Replaces NaN, infinities and negative zero by `0.0`.
///
/// Every derived quantity passes through here so that an impossible
/// computation surfaces as the missing-value sentinel.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Quadrature sum `sqrt(a² + b²)`.
#[inline]
pub fn quadrature(a: f64, b: f64) -> f64 {
    libm::sqrt(a * a + b * b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG_TO_RAD, PI};

    fn separation_deg(lat1: f64, lat2: f64, dlon: f64) -> f64 {
        let (s1, c1) = libm::sincos(lat1 * DEG_TO_RAD);
        let (s2, c2) = libm::sincos(lat2 * DEG_TO_RAD);
        vincenty_angular_separation(s1, c1, s2, c2, dlon * DEG_TO_RAD) * 180.0 / PI
    }

    #[test]
    fn test_vincenty_coincident() {
        assert_eq!(separation_deg(12.5, 12.5, 0.0), 0.0);
    }

    #[test]
    fn test_vincenty_quarter_circle() {
        assert!((separation_deg(0.0, 0.0, 90.0) - 90.0).abs() < 1e-10);
        assert!((separation_deg(90.0, 0.0, 0.0) - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_vincenty_antipodes() {
        assert!((separation_deg(0.0, 0.0, 180.0) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
        assert!(sanitize(-0.0).is_sign_positive());
        assert_eq!(sanitize(-1.25), -1.25);
    }

    #[test]
    fn test_quadrature() {
        assert_eq!(quadrature(3.0, 4.0), 5.0);
        assert_eq!(quadrature(0.0, 0.0), 0.0);
    }
}
