//! Error types for the arithmetic API
//!
//! The cache itself has no error type: a miss is an ordinary `None`. Errors
//! only arise in the serving layer, from bad operands.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the API handlers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Operands failed validation or could not be parsed
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API layer.
pub type Result<T> = std::result::Result<T, ApiError>;
