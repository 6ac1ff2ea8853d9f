//! Operand Validation
//!
//! Checks that query operands look like integers or decimal floats before
//! any parsing is attempted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ApiError, Result};

static INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-+]?(?:0|[1-9][0-9]*))$").expect("valid int pattern"));

static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-+]?(?:[0-9]+))?(?:\.[0-9]*)?(?:[eE][+\-]?(?:[0-9]+))?$")
        .expect("valid float pattern")
});

/// Returns true if `value` is a non-empty integer or float literal.
fn is_number(value: &str) -> bool {
    !value.is_empty() && (INT_RE.is_match(value) || FLOAT_RE.is_match(value))
}

/// Validates both operands, naming every invalid one in the error message.
pub fn validate_operands(x: &str, y: &str) -> Result<()> {
    match (is_number(x), is_number(y)) {
        (true, true) => Ok(()),
        (false, false) => Err(ApiError::InvalidRequest(format!(
            "x value: {} not valid number, y value: {} not valid number",
            x, y
        ))),
        (false, true) => Err(ApiError::InvalidRequest(format!(
            "x value: {} not valid number",
            x
        ))),
        (true, false) => Err(ApiError::InvalidRequest(format!(
            "y value: {} not valid number",
            y
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers() {
        for value in ["0", "1", "-1", "+42", "1.5", "-0.25", ".5", "1.", "1e10", "2.5E-3"] {
            assert!(is_number(value), "{} should be accepted", value);
        }
    }

    #[test]
    fn test_rejects_non_numbers() {
        for value in ["", "abc", "1--", "1..", "0..1", "1.2.3", "--1", "1e", "NaN", "inf"] {
            assert!(!is_number(value), "{} should be rejected", value);
        }
    }

    #[test]
    fn test_both_invalid_message() {
        let err = validate_operands("1--", "1..").unwrap_err();
        assert_eq!(
            err.to_string(),
            "x value: 1-- not valid number, y value: 1.. not valid number"
        );
    }

    #[test]
    fn test_single_invalid_message() {
        assert_eq!(
            validate_operands("a", "1").unwrap_err().to_string(),
            "x value: a not valid number"
        );
        assert_eq!(
            validate_operands("1", "").unwrap_err().to_string(),
            "y value:  not valid number"
        );
    }

    #[test]
    fn test_valid_operands() {
        assert!(validate_operands("1", "2.5").is_ok());
    }
}
