//! Derived astrometric and photometric quantities.
//!
//! All functions are pure and follow the sentinel rule: if an input the
//! formula depends on is `0.0` (not measured), the result is `0.0`. Results
//! never carry NaN, infinity or negative zero.
//!
//! Units: positions in degrees, parallax and proper motion in mas and mas/yr,
//! distances in parsecs, velocities in km/s.

use crate::constants::{DEG_TO_RAD, KM_PER_S_PER_AU_PER_YR, MAS_PER_PARSEC_PARALLAX, RAD_TO_DEG};
use crate::math::{quadrature, sanitize, vincenty_angular_separation};
use crate::SkyPosition;

/// Minimum proper-motion signal-to-noise ratio for a measurement to count as real.
pub const PROPER_MOTION_MIN_SNR: f64 = 3.0;

/// Great-circle separation between two positions, in degrees times `scale`.
///
/// Pass [`DEG_ARCSEC`](crate::constants::DEG_ARCSEC) for arcseconds or `1.0`
/// for degrees.
///
/// ```
/// use celestial_core::{astrometry::angular_distance, constants::DEG_ARCSEC, SkyPosition};
///
/// let a = SkyPosition::new(10.0, 20.0);
/// let b = SkyPosition::new(10.0, 20.001);
/// assert!((angular_distance(a, b, DEG_ARCSEC) - 3.6).abs() < 1e-6);
/// ```
pub fn angular_distance(a: SkyPosition, b: SkyPosition, scale: f64) -> f64 {
    let (sin1, cos1) = libm::sincos(a.dec * DEG_TO_RAD);
    let (sin2, cos2) = libm::sincos(b.dec * DEG_TO_RAD);
    let delta_lon = (b.ra - a.ra) * DEG_TO_RAD;
    sanitize(vincenty_angular_separation(sin1, cos1, sin2, cos2, delta_lon) * RAD_TO_DEG * scale)
}

/// Distance in parsecs from a parallax in mas.
pub fn parallactic_distance(parallax: f64) -> f64 {
    if parallax == 0.0 {
        return 0.0;
    }
    sanitize(MAS_PER_PARSEC_PARALLAX / parallax)
}

/// Total proper motion `sqrt(pmra² + pmdec²)` in mas/yr.
pub fn total_proper_motion(pmra: f64, pmdec: f64) -> f64 {
    sanitize(quadrature(pmra, pmdec))
}

/// Tangential velocity in km/s from proper motion (mas/yr) and parallax (mas).
pub fn tangential_velocity(pmra: f64, pmdec: f64, parallax: f64) -> f64 {
    if parallax == 0.0 {
        return 0.0;
    }
    sanitize(KM_PER_S_PER_AU_PER_YR * total_proper_motion(pmra, pmdec) / parallax)
}

/// Space velocity in km/s. A missing radial velocity contributes nothing;
/// a missing tangential velocity makes the total unknown.
pub fn total_velocity(radial_velocity: f64, tangential_velocity: f64) -> f64 {
    if tangential_velocity == 0.0 {
        return 0.0;
    }
    sanitize(quadrature(radial_velocity, tangential_velocity))
}

/// Absolute magnitude `m + 5·log10(plx / 1000) + 5`.
///
/// Returns `0.0` when either input is missing or the parallax is negative.
pub fn absolute_magnitude_from_parallax(magnitude: f64, parallax: f64) -> f64 {
    if magnitude == 0.0 || parallax <= 0.0 {
        return 0.0;
    }
    sanitize(magnitude + 5.0 * libm::log10(parallax / MAS_PER_PARSEC_PARALLAX) + 5.0)
}

/// Error of [`absolute_magnitude_from_parallax`]:
/// `sqrt(me² + (5 / ln 10 · pe / plx)²)`.
pub fn absolute_magnitude_from_parallax_error(
    magnitude: f64,
    magnitude_error: f64,
    parallax: f64,
    parallax_error: f64,
) -> f64 {
    if magnitude == 0.0 || parallax == 0.0 {
        return 0.0;
    }
    let parallax_term = 5.0 / std::f64::consts::LN_10 * parallax_error / parallax;
    sanitize(quadrature(magnitude_error, parallax_term))
}

/// Absolute magnitude `m − 5·log10(d) + 5` from a distance in parsecs.
pub fn absolute_magnitude_from_distance(magnitude: f64, distance: f64) -> f64 {
    if magnitude == 0.0 || distance <= 0.0 {
        return 0.0;
    }
    sanitize(magnitude - 5.0 * libm::log10(distance) + 5.0)
}

/// Error of a sum or difference of two measurements.
///
/// `0.0` when either error is missing, otherwise the quadrature sum.
pub fn addition_error(error1: f64, error2: f64) -> f64 {
    if error1 == 0.0 || error2 == 0.0 {
        return 0.0;
    }
    sanitize(quadrature(error1, error2))
}

/// `true` for a measured proper motion whose signal-to-noise ratio is below 3.
pub fn is_proper_motion_spurious(proper_motion: f64, error: f64) -> bool {
    if proper_motion == 0.0 || error == 0.0 {
        return false;
    }
    proper_motion.abs() / error.abs() < PROPER_MOTION_MIN_SNR
}

/// `true` for a measured proper motion that cannot be trusted at all: its
/// error is missing, non-finite or larger than the motion itself.
pub fn is_proper_motion_faulty(proper_motion: f64, error: f64) -> bool {
    if proper_motion == 0.0 {
        return false;
    }
    !proper_motion.is_finite()
        || !error.is_finite()
        || error == 0.0
        || error.abs() > proper_motion.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEG_ARCSEC;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_angular_distance_self_is_zero() {
        let p = SkyPosition::new(123.456, -45.678);
        assert_eq!(angular_distance(p, p, DEG_ARCSEC), 0.0);
    }

    #[test]
    fn test_angular_distance_symmetric() {
        let a = SkyPosition::new(10.684, 41.269);
        let b = SkyPosition::new(10.700, 41.250);
        let ab = angular_distance(a, b, DEG_ARCSEC);
        let ba = angular_distance(b, a, DEG_ARCSEC);
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < EPSILON);
    }

    #[test]
    fn test_angular_distance_across_ra_wrap() {
        let a = SkyPosition::new(359.9, 0.0);
        let b = SkyPosition::new(0.1, 0.0);
        assert!((angular_distance(a, b, 1.0) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_parallactic_distance() {
        assert_eq!(parallactic_distance(0.0), 0.0);
        assert!((parallactic_distance(10.0) - 100.0).abs() < EPSILON);
        assert!((parallactic_distance(768.0665) - 1.3019706).abs() < 1e-6);
    }

    #[test]
    fn test_total_proper_motion() {
        assert_eq!(total_proper_motion(3.0, 4.0), 5.0);
        assert_eq!(total_proper_motion(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_tangential_velocity() {
        assert_eq!(tangential_velocity(3.0, 4.0, 0.0), 0.0);
        let vt = tangential_velocity(300.0, 400.0, 100.0);
        assert!((vt - 5.0 * KM_PER_S_PER_AU_PER_YR).abs() < EPSILON);
    }

    #[test]
    fn test_total_velocity() {
        assert_eq!(total_velocity(25.0, 0.0), 0.0);
        assert_eq!(total_velocity(0.0, 12.0), 12.0);
        assert_eq!(total_velocity(-3.0, 4.0), 5.0);
    }

    #[test]
    fn test_absolute_magnitude_from_parallax() {
        assert!((absolute_magnitude_from_parallax(10.0, 100.0) - 10.0).abs() < EPSILON);
        assert!((absolute_magnitude_from_parallax(10.0, 10.0) - 5.0).abs() < EPSILON);
        assert_eq!(absolute_magnitude_from_parallax(0.0, 10.0), 0.0);
        assert_eq!(absolute_magnitude_from_parallax(10.0, 0.0), 0.0);
        assert_eq!(absolute_magnitude_from_parallax(10.0, -2.0), 0.0);
    }

    #[test]
    fn test_absolute_magnitude_error() {
        let err = absolute_magnitude_from_parallax_error(10.0, 0.03, 10.0, 0.0);
        assert!((err - 0.03).abs() < EPSILON);

        let err = absolute_magnitude_from_parallax_error(10.0, 0.0, 10.0, 1.0);
        assert!((err - 5.0 / std::f64::consts::LN_10 * 0.1).abs() < EPSILON);

        assert_eq!(absolute_magnitude_from_parallax_error(0.0, 0.1, 10.0, 1.0), 0.0);
        assert_eq!(absolute_magnitude_from_parallax_error(12.0, 0.1, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_absolute_magnitude_from_distance() {
        assert!((absolute_magnitude_from_distance(10.0, 10.0) - 10.0).abs() < EPSILON);
        assert!((absolute_magnitude_from_distance(10.0, 100.0) - 5.0).abs() < EPSILON);
        assert_eq!(absolute_magnitude_from_distance(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_addition_error() {
        assert_eq!(addition_error(0.0, 0.1), 0.0);
        assert_eq!(addition_error(0.1, 0.0), 0.0);
        assert_eq!(addition_error(0.3, 0.4), 0.5);
    }

    #[test]
    fn test_proper_motion_quality() {
        assert!(is_proper_motion_spurious(2.0, 1.0));
        assert!(!is_proper_motion_spurious(30.0, 1.0));
        assert!(!is_proper_motion_spurious(0.0, 1.0));

        assert!(is_proper_motion_faulty(5.0, 0.0));
        assert!(is_proper_motion_faulty(5.0, 6.0));
        assert!(is_proper_motion_faulty(5.0, f64::NAN));
        assert!(!is_proper_motion_faulty(5.0, 0.5));
        assert!(!is_proper_motion_faulty(0.0, 0.0));
    }

    #[test]
    fn test_results_are_finite() {
        assert!(parallactic_distance(f64::MIN_POSITIVE).is_finite());
        assert!(tangential_velocity(f64::MAX, f64::MAX, 1e-300).is_finite());
    }
}
