//! Dimension string parsing
//!
//! Rectangles arriving from style declarations or configuration may hold
//! values like `"12px"` or `"-3.5em"`. Only the leading numeric portion
//! matters; the unit suffix is discarded.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?))")
        .expect("numeric prefix pattern is valid")
});

/// Parse the leading number of a dimension string
///
/// Returns NaN when the string has no numeric prefix, so callers keep
/// going with a degraded value instead of failing.
pub fn parse_dimension(text: &str) -> f64 {
    NUMERIC_PREFIX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Format a pixel value the way a style property expects it
///
/// Integral values drop the fraction (`105px`), negative zero prints as
/// `0px`, and non-finite values use the JS spellings. Magnitudes of at
/// least 1e21 or below 1e-6 switch to exponent form (`1e+21px`, `1e-7px`).
pub fn format_px(value: f64) -> String {
    if value.is_nan() {
        "NaNpx".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinitypx".to_string()
        } else {
            "-Infinitypx".to_string()
        }
    } else if value == 0.0 {
        "0px".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        format!("{}px", exponent_form(value))
    } else {
        format!("{}px", value)
    }
}

// `{:e}` yields the shortest mantissa (`1.5e-7`); JS signs positive exponents.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixel_suffix() {
        assert_eq!(parse_dimension("12px"), 12.0);
        assert_eq!(parse_dimension("-3.5em"), -3.5);
        assert_eq!(parse_dimension("  7"), 7.0);
        assert_eq!(parse_dimension(".25rem"), 0.25);
        assert_eq!(parse_dimension("1e2px"), 100.0);
    }

    #[test]
    fn test_parse_without_number_is_nan() {
        assert!(parse_dimension("auto").is_nan());
        assert!(parse_dimension("").is_nan());
        assert!(parse_dimension("px12").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_dimension("Infinitypx"), f64::INFINITY);
        assert_eq!(parse_dimension("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(105.0), "105px");
        assert_eq!(format_px(105.5), "105.5px");
        assert_eq!(format_px(-3.0), "-3px");
        assert_eq!(format_px(-0.0), "0px");
        assert_eq!(format_px(f64::NAN), "NaNpx");
        assert_eq!(format_px(f64::NEG_INFINITY), "-Infinitypx");
    }

    #[test]
    fn test_format_px_exponent_form() {
        assert_eq!(format_px(1e21), "1e+21px");
        assert_eq!(format_px(-2.5e22), "-2.5e+22px");
        assert_eq!(format_px(1e-7), "1e-7px");
        assert_eq!(format_px(1.5e-7), "1.5e-7px");
        assert_eq!(format_px(1e20), "100000000000000000000px");
        assert_eq!(format_px(0.000001), "0.000001px");
    }
}
