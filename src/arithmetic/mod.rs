//! Arithmetic Module
//!
//! The computation the API serves: validate two operands, parse them, apply
//! one of four operations and format the answer.

mod format;
mod validate;

pub use format::format_answer;
pub use validate::validate_operands;

use crate::error::{ApiError, Result};
use crate::models::ArithmeticResult;

// == Operation ==
/// The four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Name used for the `action` field and the route path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Applies the operation with IEEE 754 semantics; division by zero
    /// yields an infinity or NaN rather than an error.
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            Operation::Add => x + y,
            Operation::Subtract => x - y,
            Operation::Multiply => x * y,
            Operation::Divide => x / y,
        }
    }
}

// == Compute ==
/// Parses `x` and `y` and applies `op`.
///
/// Expects operands that already passed [`validate_operands`]; anything the
/// float parser still rejects (such as a lone `.`) or a literal too large for
/// an `f64` (such as `1e400`) is reported as an invalid request. Only the
/// answer may be non-finite.
pub fn compute(op: Operation, x: &str, y: &str) -> Result<ArithmeticResult> {
    let (x_val, y_val) = parse_operands(x, y).map_err(|e| {
        ApiError::InvalidRequest(format!("{} values: {} and {}: {}", op.as_str(), x, y, e))
    })?;

    Ok(ArithmeticResult {
        action: op.as_str().to_string(),
        x: x_val,
        y: y_val,
        answer: format_answer(op.apply(x_val, y_val)),
        cached: false,
    })
}

fn parse_operands(x: &str, y: &str) -> std::result::Result<(f64, f64), String> {
    Ok((parse_operand(x)?, parse_operand(y)?))
}

fn parse_operand(value: &str) -> std::result::Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    // The parser saturates overflowing literals to infinity
    if !parsed.is_finite() {
        return Err("value out of range".to_string());
    }
    Ok(parsed)
}
