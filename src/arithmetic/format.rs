//! Answer Formatting
//!
//! Renders an `f64` as the shortest string that round-trips, switching to
//! exponent notation for very large or very small magnitudes.

/// Formats `value` using the shortest round-trip digits.
///
/// Plain notation is used when the decimal exponent is in `-4..6`, otherwise
/// `d.ddde±XX`. Non-finite values render as `+Inf`, `-Inf` or `NaN`.
pub fn format_answer(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` yields the shortest digits, e.g. "1.0003857177864861e8"
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..6).contains(&exponent) {
        format!("{}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_answer(2.0), "2");
        assert_eq!(format_answer(0.0), "0");
        assert_eq!(format_answer(-1.0), "-1");
        assert_eq!(format_answer(0.1 + 0.1), "0.2");
        assert_eq!(format_answer(0.05), "0.05");
        assert_eq!(format_answer(0.0001), "0.0001");
        assert_eq!(format_answer(123456.0), "123456");
    }

    #[test]
    fn test_exponent_values() {
        assert_eq!(format_answer(1_000_000.0), "1e+06");
        assert_eq!(format_answer(1.0003857177864861e8), "1.0003857177864861e+08");
        assert_eq!(format_answer(-3.3076230632241315e277), "-3.3076230632241315e+277");
        assert_eq!(format_answer(0.00001), "1e-05");
        assert_eq!(format_answer(1.5e-7), "1.5e-07");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_answer(f64::INFINITY), "+Inf");
        assert_eq!(format_answer(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_answer(f64::NAN), "NaN");
    }
}
