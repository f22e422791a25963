//! Lenient parsing of catalog cells into numbers.
//!
//! Survey services return every cell as text. Blank cells, `NaN`, `null`,
//! infinities and anything else that is not a number all mean "not measured",
//! which this crate spells as `0`. Nothing here fails.
//!
//! ```
//! use celestial_core::numeric::{to_double, to_integer, to_long};
//!
//! assert_eq!(to_double(" 14.237 "), 14.237);
//! assert_eq!(to_double("NaN"), 0.0);
//! assert_eq!(to_double(""), 0.0);
//! assert_eq!(to_integer("12.0"), 12);
//! assert_eq!(to_long("4295806720"), 4_295_806_720);
//! ```

use crate::math::sanitize;

/// Parses a cell as `f64`. Unparseable or non-finite input yields `0.0`.
pub fn to_double(cell: &str) -> f64 {
    cell.trim().parse::<f64>().map(sanitize).unwrap_or(0.0)
}

/// Parses a cell as `i32`.
///
/// Accepts integral decimal text such as `"12.0"`; fractional or
/// out-of-range values yield `0`.
pub fn to_integer(cell: &str) -> i32 {
    let trimmed = cell.trim();
    if let Ok(v) = trimmed.parse::<i32>() {
        return v;
    }
    integral_value(trimmed)
        .filter(|v| *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
        .map_or(0, |v| v as i32)
}

/// Parses a cell as `i64`.
///
/// Same rules as [`to_integer`]; large identifiers (Gaia source ids) parse
/// exactly when written as plain integers.
pub fn to_long(cell: &str) -> i64 {
    let trimmed = cell.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return v;
    }
    integral_value(trimmed)
        .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64)
        .map_or(0, |v| v as i64)
}

fn integral_value(text: &str) -> Option<f64> {
    let v = text.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0).then_some(v)
}

/// Returns a copy of `row` with every `NaN` cell replaced by `"0"`.
///
/// Matching is case-insensitive and ignores surrounding whitespace. The
/// input row is left untouched.
pub fn replace_nan_values_by_zero(row: &[String]) -> Vec<String> {
    row.iter()
        .map(|cell| {
            if cell.trim().eq_ignore_ascii_case("nan") {
                "0".to_string()
            } else {
                cell.clone()
            }
        })
        .collect()
}

/// `true` when `value` is the missing-value sentinel.
#[inline]
pub fn is_sentinel(value: f64) -> bool {
    value == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_double_plain() {
        assert_eq!(to_double("1.5"), 1.5);
        assert_eq!(to_double("-12.25"), -12.25);
        assert_eq!(to_double("  3e-2  "), 0.03);
    }

    #[test]
    fn test_to_double_missing_values() {
        for cell in ["", "   ", "NaN", "nan", "null", "--", "abc", "inf", "-inf"] {
            assert_eq!(to_double(cell), 0.0, "cell {:?}", cell);
        }
    }

    #[test]
    fn test_to_double_never_negative_zero() {
        assert!(to_double("-0").is_sign_positive());
        assert!(to_double("-0.000").is_sign_positive());
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer("42"), 42);
        assert_eq!(to_integer(" -7 "), -7);
        assert_eq!(to_integer("12.0"), 12);
        assert_eq!(to_integer("12.5"), 0);
        assert_eq!(to_integer("x"), 0);
        assert_eq!(to_integer(""), 0);
        assert_eq!(to_integer("99999999999"), 0);
    }

    #[test]
    fn test_to_long() {
        assert_eq!(to_long("5853498713190525696"), 5_853_498_713_190_525_696);
        assert_eq!(to_long("-3"), -3);
        assert_eq!(to_long("7.0"), 7);
        assert_eq!(to_long("NaN"), 0);
        assert_eq!(to_long(""), 0);
    }

    #[test]
    fn test_replace_nan_values_by_zero() {
        let row = vec![
            "1.0".to_string(),
            "NaN".to_string(),
            " nan ".to_string(),
            "J1234".to_string(),
        ];
        let cleaned = replace_nan_values_by_zero(&row);
        assert_eq!(cleaned, vec!["1.0", "0", "0", "J1234"]);
        assert_eq!(row[1], "NaN");
    }

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel(0.0));
        assert!(is_sentinel(-0.0));
        assert!(!is_sentinel(1e-12));
    }
}
