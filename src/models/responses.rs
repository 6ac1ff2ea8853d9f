//! Response DTOs for the arithmetic API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

/// Result of one arithmetic operation.
///
/// This is the value the caching middleware stores; `cached` is flipped on
/// when a response is served from the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticResult {
    /// Operation name (`add`, `subtract`, `multiply`, `divide`)
    pub action: String,
    /// Parsed left-hand operand
    pub x: f64,
    /// Parsed right-hand operand
    pub y: f64,
    /// Formatted answer
    pub answer: String,
    /// Whether this response came from the cache
    pub cached: bool,
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
