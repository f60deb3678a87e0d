//! Parse-or-default numeric input helpers.
//!
//! The calculator never rejects input: unparseable or empty text degrades to
//! a documented fallback instead of an error, so a recipe is always shown.
//! These helpers make that fallback explicit rather than an exception-swallow.

use super::types::DEFAULT_AREA_CM2;

/// Parse a float, yielding 0.0 for empty or unparseable text.
pub fn parse_or_zero(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Parse a flask area as a positive integer (cm²), yielding 75 for empty,
/// unparseable, or non-positive text.
pub fn parse_area_or_default(text: &str) -> u32 {
    match text.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).unwrap_or(DEFAULT_AREA_CM2),
        _ => DEFAULT_AREA_CM2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_zero_valid() {
        assert_eq!(parse_or_zero("10"), 10.0);
        assert_eq!(parse_or_zero("0.028"), 0.028);
        assert_eq!(parse_or_zero("  5.5 "), 5.5);
    }

    #[test]
    fn test_parse_or_zero_invalid() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("1,5"), 0.0);
        assert_eq!(parse_or_zero("10."), 10.0); // Rust accepts trailing dot
    }

    #[test]
    fn test_parse_area_valid() {
        assert_eq!(parse_area_or_default("150"), 150);
        assert_eq!(parse_area_or_default(" 25 "), 25);
    }

    #[test]
    fn test_parse_area_fallback() {
        assert_eq!(parse_area_or_default(""), 75);
        assert_eq!(parse_area_or_default("abc"), 75);
        assert_eq!(parse_area_or_default("12.5"), 75); // integers only
        assert_eq!(parse_area_or_default("0"), 75);
        assert_eq!(parse_area_or_default("-30"), 75);
    }

    #[test]
    fn test_parse_area_overflow_falls_back() {
        assert_eq!(parse_area_or_default("99999999999"), 75);
    }
}
