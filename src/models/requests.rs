//! Request DTOs for the arithmetic API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query parameters shared by every arithmetic endpoint (`?x=..&y=..`)
///
/// Operands stay as raw strings so validation can report exactly what the
/// client sent. Missing parameters deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperandsQuery {
    /// Left-hand operand
    #[serde(default)]
    pub x: String,
    /// Right-hand operand
    #[serde(default)]
    pub y: String,
}
