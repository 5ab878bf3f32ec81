//! Display formatting for calculation results.
//!
//! The display is a fixed-width calculator screen, not an arbitrary-precision
//! readout: results render in their default decimal form, and anything wider
//! than [`MAX_DISPLAY_LEN`] characters falls back to
//! [`SIGNIFICANT_DIGITS`] significant digits.

/// Widest result the display shows in its default decimal form.
const MAX_DISPLAY_LEN: usize = 10;

/// Significant digits used when the default form is too wide.
const SIGNIFICANT_DIGITS: usize = 8;

/// Format a result for the display.
///
/// Zero always renders as `"0"`, which also folds negative zero (a sign
/// toggle on `"0"` must not show `"-0"`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let default = value.to_string();
    if default.len() > MAX_DISPLAY_LEN {
        to_precision(value, SIGNIFICANT_DIGITS)
    } else {
        default
    }
}

/// Render `value` with a fixed count of significant digits.
///
/// Follows the usual to-precision rule: fixed notation while the leading
/// digit's exponent fits (`-6 <= e < digits`), exponential notation outside
/// that range. `value` must be non-zero and finite.
fn to_precision(value: f64, digits: usize) -> String {
    let exponent = value.abs().log10().floor() as i32;

    if exponent < -6 || exponent >= digits as i32 {
        format!("{:.*e}", digits - 1, value)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        format!("{value:.decimals$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_render_without_decimals() {
        assert_eq!(format_number(56.0), "56");
        assert_eq!(format_number(-19.0), "-19");
    }

    #[test]
    fn test_short_decimals_pass_through() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.25), "-3.25");
    }

    #[test]
    fn test_zero_is_always_plain() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_ten_characters_still_fit() {
        // "1234567890" is exactly the display width.
        assert_eq!(format_number(1234567890.0), "1234567890");
    }

    #[test]
    fn test_long_decimal_truncates_to_significant_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(2.0 / 3.0), "0.66666667");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        // 0.1 + 0.2 renders as 0.30000000000000004 by default.
        assert_eq!(format_number(0.1 + 0.2), "0.30000000");
    }

    #[test]
    fn test_wide_integers_go_exponential() {
        assert_eq!(format_number(12345678901.0), "1.2345679e10");
    }

    #[test]
    fn test_tiny_values_go_exponential() {
        assert_eq!(format_number(0.00000001234), "1.2340000e-8");
    }

    #[test]
    fn test_negative_results_keep_their_sign() {
        assert_eq!(format_number(-1.0 / 3.0), "-0.33333333");
    }
}
