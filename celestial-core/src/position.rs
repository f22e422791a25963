//! Equatorial sky positions and their text forms.
//!
//! A [`SkyPosition`] is an ICRS right ascension / declination pair in degrees.
//! User input arrives in several notations; [`SkyPosition::parse`] accepts:
//!
//! ```text
//! Decimal degrees:   "10.684708 41.26875"
//! Space separated:   "00 42 44.33 +41 16 07.5"
//! Colon separated:   "00:42:44.33 +41:16:07.5"
//! ```
//!
//! Right ascension in sexagesimal form is always hours, declination always
//! degrees. A comma may separate the two halves.

use crate::constants::{DEG_ARCMIN, DEG_ARCSEC};
use crate::errors::{SurveyError, SurveyResult};
use crate::rounding::round_to_n_dec_lz;
use std::fmt;

const HOURS_TO_DEG: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    /// Right ascension in degrees.
    pub ra: f64,
    /// Declination in degrees.
    pub dec: f64,
}

impl SkyPosition {
    /// Creates a position without validation.
    pub const fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Creates a validated position. Right ascension is wrapped into
    /// `[0, 360)`; declination must lie in `[-90, 90]`.
    pub fn try_new(ra: f64, dec: f64) -> SurveyResult<Self> {
        if !ra.is_finite() || !dec.is_finite() {
            return Err(SurveyError::invalid_input(
                "coordinates",
                &format!("non-finite position ({}, {})", ra, dec),
            ));
        }
        if !(-90.0..=90.0).contains(&dec) {
            return Err(SurveyError::invalid_input(
                "coordinates",
                &format!("declination {} outside [-90, 90]", dec),
            ));
        }
        let ra = ra.rem_euclid(360.0);
        Ok(Self { ra: if ra == 360.0 { 0.0 } else { ra }, dec })
    }

    /// Parses `"ra dec"` in decimal or sexagesimal notation.
    pub fn parse(input: &str) -> SurveyResult<Self> {
        let normalized = input.replace(',', " ");
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let (ra, dec) = match tokens.as_slice() {
            [ra, dec] if ra.contains(':') || dec.contains(':') => {
                (
                    parse_hms(split_colons(ra)?.as_slice())?,
                    parse_dms(split_colons(dec)?.as_slice())?,
                )
            }
            [ra, dec] => (parse_number(ra)?, parse_number(dec)?),
            [h, m, s, d, am, asec] => (parse_hms(&[h, m, s])?, parse_dms(&[d, am, asec])?),
            _ => {
                return Err(SurveyError::invalid_input(
                    "coordinates",
                    &format!("cannot parse '{}' as a sky position", input.trim()),
                ))
            }
        };
        Self::try_new(ra, dec)
    }

    /// Right ascension as `hh mm ss.ss`.
    pub fn to_hms(&self) -> String {
        let ra_hours = self.ra.rem_euclid(360.0) / HOURS_TO_DEG;
        let centiseconds = (ra_hours * DEG_ARCSEC * 100.0).round() as i64;
        let centiseconds = centiseconds.rem_euclid(24 * 3600 * 100);
        let hours = centiseconds / 360_000;
        let minutes = (centiseconds / 6000) % 60;
        let seconds = (centiseconds % 6000) as f64 / 100.0;
        format!(
            "{:02} {:02} {}",
            hours,
            minutes,
            round_to_n_dec_lz(seconds, 2, 2)
        )
    }

    /// Declination as `±dd mm ss.s`.
    pub fn to_dms(&self) -> String {
        let deciseconds = (self.dec.abs() * DEG_ARCSEC * 10.0).round() as i64;
        let degrees = deciseconds / 36_000;
        let minutes = (deciseconds / 600) % 60;
        let seconds = (deciseconds % 600) as f64 / 10.0;
        let sign = if self.dec < 0.0 && deciseconds != 0 { '-' } else { '+' };
        format!(
            "{}{:02} {:02} {}",
            sign,
            degrees,
            minutes,
            round_to_n_dec_lz(seconds, 1, 2)
        )
    }
}

impl fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:+.6}", self.ra, self.dec)
    }
}

fn split_colons(token: &str) -> SurveyResult<Vec<&str>> {
    let parts: Vec<&str> = token.split(':').collect();
    if parts.len() != 3 {
        return Err(SurveyError::invalid_input(
            "coordinates",
            &format!("'{}' is not in hh:mm:ss form", token),
        ));
    }
    Ok(parts)
}

fn parse_number(token: &str) -> SurveyResult<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            SurveyError::invalid_input("coordinates", &format!("'{}' is not a number", token))
        })
}

fn sexagesimal<S: AsRef<str>>(parts: &[S]) -> SurveyResult<(f64, f64)> {
    let [whole, minutes, seconds] = parts else {
        return Err(SurveyError::invalid_input(
            "coordinates",
            "sexagesimal value needs three fields",
        ));
    };
    let whole_text = whole.as_ref().trim();
    let sign = if whole_text.starts_with('-') { -1.0 } else { 1.0 };
    let whole = parse_number(whole_text)?.abs();
    let minutes = parse_number(minutes.as_ref())?;
    let seconds = parse_number(seconds.as_ref())?;
    if !(0.0..60.0).contains(&minutes) || !(0.0..60.0).contains(&seconds) {
        return Err(SurveyError::invalid_input(
            "coordinates",
            "minutes and seconds must lie in [0, 60)",
        ));
    }
    Ok((sign, whole + minutes / DEG_ARCMIN + seconds / DEG_ARCSEC))
}

fn parse_hms<S: AsRef<str>>(parts: &[S]) -> SurveyResult<f64> {
    let (sign, hours) = sexagesimal(parts)?;
    Ok(sign * hours * HOURS_TO_DEG)
}

fn parse_dms<S: AsRef<str>>(parts: &[S]) -> SurveyResult<f64> {
    let (sign, degrees) = sexagesimal(parts)?;
    Ok(sign * degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_try_new_wraps_ra() {
        let p = SkyPosition::try_new(-10.0, 5.0).unwrap();
        assert!((p.ra - 350.0).abs() < EPSILON);
        let p = SkyPosition::try_new(720.5, 5.0).unwrap();
        assert!((p.ra - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_try_new_rejects_bad_dec() {
        assert!(SkyPosition::try_new(10.0, 90.5).is_err());
        assert!(SkyPosition::try_new(10.0, f64::NAN).is_err());
        assert!(SkyPosition::try_new(10.0, -90.0).is_ok());
    }

    #[test]
    fn test_parse_decimal() {
        let p = SkyPosition::parse("10.684708 41.26875").unwrap();
        assert_eq!(p, SkyPosition::new(10.684708, 41.26875));

        let p = SkyPosition::parse("10.5, -3.25").unwrap();
        assert_eq!(p, SkyPosition::new(10.5, -3.25));
    }

    #[test]
    fn test_parse_sexagesimal_spaces() {
        let p = SkyPosition::parse("00 42 44.33 +41 16 07.5").unwrap();
        assert!((p.ra - 10.684708333).abs() < 1e-6);
        assert!((p.dec - 41.26875).abs() < 1e-6);
    }

    #[test]
    fn test_parse_sexagesimal_colons() {
        let p = SkyPosition::parse("12:00:00 -00:30:00").unwrap();
        assert!((p.ra - 180.0).abs() < EPSILON);
        assert!((p.dec + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_parse_errors() {
        assert!(SkyPosition::parse("").is_err());
        assert!(SkyPosition::parse("abc def").is_err());
        assert!(SkyPosition::parse("12:00 +10:00:00").is_err());
        assert!(SkyPosition::parse("12 61 00 +10 00 00").is_err());
        assert!(SkyPosition::parse("10.0 95.0").is_err());
    }

    #[test]
    fn test_to_hms() {
        assert_eq!(SkyPosition::new(10.684708333, 0.0).to_hms(), "00 42 44.33");
        assert_eq!(SkyPosition::new(359.99999999, 0.0).to_hms(), "00 00 00.00");
        assert_eq!(SkyPosition::new(180.0, 0.0).to_hms(), "12 00 00.00");
    }

    #[test]
    fn test_to_dms() {
        assert_eq!(SkyPosition::new(0.0, 41.26875).to_dms(), "+41 16 07.5");
        assert_eq!(SkyPosition::new(0.0, -0.5).to_dms(), "-00 30 00.0");
        assert_eq!(SkyPosition::new(0.0, -0.00000001).to_dms(), "+00 00 00.0");
    }

    #[test]
    fn test_sexagesimal_round_trip() {
        let p = SkyPosition::new(83.633083, -5.391111);
        let text = format!("{} {}", p.to_hms(), p.to_dms());
        let q = SkyPosition::parse(&text).unwrap();
        assert!((p.ra - q.ra).abs() < 1e-4);
        assert!((p.dec - q.dec).abs() < 1e-4);
    }
}
