//! Display formatting policy.
//!
//! Recipes carry full-precision floats; everything shown to the user rounds
//! to one decimal place. Media volume additionally clamps negatives to zero,
//! applied to the unrounded value.

/// Format a quantity to one decimal place.
pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a media volume for display: clamp below zero, then round.
pub fn display_media(value: f64) -> String {
    one_decimal(value.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_decimal() {
        assert_eq!(one_decimal(15.0), "15.0");
        assert_eq!(one_decimal(1.05), "1.1");
        assert_eq!(one_decimal(0.0), "0.0");
        assert_eq!(one_decimal(2.04), "2.0");
    }

    #[test]
    fn test_one_decimal_rounds_binary_value() {
        // The f64 nearest 13.95 is 13.9499...; rounding follows the binary
        // value, not the decimal literal
        assert_eq!(one_decimal(13.95), "13.9");
    }

    #[test]
    fn test_display_media_clamps_negative() {
        assert_eq!(display_media(-35.0), "0.0");
        assert_eq!(display_media(-0.04), "0.0");
        assert_eq!(display_media(13.2), "13.2");
    }

    #[test]
    fn test_clamp_applies_before_rounding() {
        // -0.04 rounds to "-0.0" if clamped after; must clamp first
        assert_ne!(display_media(-0.04), "-0.0");
    }
}
