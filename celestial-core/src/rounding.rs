//! Decimal formatting policies for exported catalog values.
//!
//! Every number shown to a user or written to a CSV goes through one of three
//! policies:
//!
//! | Policy | Function | `-5.2500`, n = 3 |
//! |--------|----------|------------------|
//! | fixed decimals | [`round_to_n_dec`] | `-5.250` |
//! | trailing zeros trimmed | [`round_to_n_dec_nz`] | `-5.25` |
//! | zero-padded integer part | [`round_to_n_dec_lz`] (width 2) | `-05.250` |
//!
//! None of them emits `-0`, and non-finite input formats as zero. Exact
//! binary ties round half to even. Formatting the parsed output a second time
//! returns the same string.

use crate::math::sanitize;

/// Formats `value` with exactly `decimals` fractional digits.
///
/// ```
/// use celestial_core::rounding::round_to_n_dec;
///
/// assert_eq!(round_to_n_dec(1.23456, 3), "1.235");
/// assert_eq!(round_to_n_dec(-0.0001, 2), "0.00");
/// assert_eq!(round_to_n_dec(f64::NAN, 1), "0.0");
/// ```
pub fn round_to_n_dec(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, sanitize(value));
    strip_negative_zero(formatted)
}

/// Formats `value` with at most `decimals` fractional digits, dropping
/// trailing zeros and a dangling decimal point.
pub fn round_to_n_dec_nz(value: f64, decimals: usize) -> String {
    let fixed = round_to_n_dec(value, decimals);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    strip_negative_zero(trimmed.to_string())
}

/// Formats `value` with `decimals` fractional digits and the integer part
/// padded with leading zeros to `width` digits. The sign stays in front.
///
/// ```
/// use celestial_core::rounding::round_to_n_dec_lz;
///
/// assert_eq!(round_to_n_dec_lz(-5.25, 2, 2), "-05.25");
/// assert_eq!(round_to_n_dec_lz(7.0, 1, 3), "007.0");
/// ```
pub fn round_to_n_dec_lz(value: f64, decimals: usize, width: usize) -> String {
    let value = sanitize(value);
    let magnitude = round_to_n_dec(value.abs(), decimals);
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (magnitude.as_str(), None),
    };

    let mut out = String::with_capacity(width + decimals + 2);
    let is_zero = magnitude.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for _ in int_part.len()..width {
        out.push('0');
    }
    out.push_str(int_part);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn strip_negative_zero(formatted: String) -> String {
    match formatted.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => formatted,
    }
}

/// A formatting policy selected by value, as stored in column descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalFormat {
    /// [`round_to_n_dec`] with the given number of decimals.
    Fixed(usize),
    /// [`round_to_n_dec_nz`] with the given maximum number of decimals.
    TrimZeros(usize),
    /// [`round_to_n_dec_lz`] with `(decimals, width)`.
    ZeroPadded(usize, usize),
}

impl DecimalFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Fixed(n) => round_to_n_dec(value, n),
            Self::TrimZeros(n) => round_to_n_dec_nz(value, n),
            Self::ZeroPadded(n, width) => round_to_n_dec_lz(value, n, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_decimals() {
        assert_eq!(round_to_n_dec(12.3456, 2), "12.35");
        assert_eq!(round_to_n_dec(12.0, 3), "12.000");
        assert_eq!(round_to_n_dec(-1.005, 0), "-1");
        assert_eq!(round_to_n_dec(0.0, 4), "0.0000");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(round_to_n_dec(-0.0, 2), "0.00");
        assert_eq!(round_to_n_dec(-0.004, 2), "0.00");
        assert_eq!(round_to_n_dec_nz(-0.004, 2), "0");
        assert_eq!(round_to_n_dec_lz(-0.004, 2, 2), "00.00");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(round_to_n_dec(f64::INFINITY, 2), "0.00");
        assert_eq!(round_to_n_dec_nz(f64::NAN, 3), "0");
        assert_eq!(round_to_n_dec_lz(f64::NEG_INFINITY, 1, 2), "00.0");
    }

    #[test]
    fn test_half_even_on_exact_ties() {
        assert_eq!(round_to_n_dec(0.5, 0), "0");
        assert_eq!(round_to_n_dec(1.5, 0), "2");
        assert_eq!(round_to_n_dec(2.5, 0), "2");
        assert_eq!(round_to_n_dec(0.125, 2), "0.12");
    }

    #[test]
    fn test_trim_zeros() {
        assert_eq!(round_to_n_dec_nz(1.5000, 4), "1.5");
        assert_eq!(round_to_n_dec_nz(2.0, 3), "2");
        assert_eq!(round_to_n_dec_nz(10.0, 0), "10");
        assert_eq!(round_to_n_dec_nz(-3.14159, 2), "-3.14");
        assert_eq!(round_to_n_dec_nz(100.0, 2), "100");
    }

    #[test]
    fn test_zero_padded() {
        assert_eq!(round_to_n_dec_lz(5.25, 2, 2), "05.25");
        assert_eq!(round_to_n_dec_lz(-5.25, 2, 2), "-05.25");
        assert_eq!(round_to_n_dec_lz(123.4, 1, 2), "123.4");
        assert_eq!(round_to_n_dec_lz(9.999, 2, 2), "10.00");
        assert_eq!(round_to_n_dec_lz(3.0, 0, 2), "03");
    }

    #[test]
    fn test_idempotence() {
        let samples = [0.0, 1.23456789, -45.999951, 359.99999, 1e-7, 18.305, -0.0049];
        for &v in &samples {
            for n in 0..7 {
                let once = round_to_n_dec(v, n);
                let twice = round_to_n_dec(once.parse().unwrap(), n);
                assert_eq!(once, twice, "fixed {} @ {}", v, n);

                let once = round_to_n_dec_nz(v, n);
                let twice = round_to_n_dec_nz(once.parse().unwrap(), n);
                assert_eq!(once, twice, "nz {} @ {}", v, n);

                let once = round_to_n_dec_lz(v, n, 3);
                let twice = round_to_n_dec_lz(once.parse().unwrap(), n, 3);
                assert_eq!(once, twice, "lz {} @ {}", v, n);
            }
        }
    }

    #[test]
    fn test_decimal_format_apply() {
        assert_eq!(DecimalFormat::Fixed(3).apply(1.0), "1.000");
        assert_eq!(DecimalFormat::TrimZeros(3).apply(1.0), "1");
        assert_eq!(DecimalFormat::ZeroPadded(1, 2).apply(-1.0), "-01.0");
    }
}
