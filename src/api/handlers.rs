//! API Handlers
//!
//! HTTP request handlers for each arithmetic endpoint, plus the shared
//! application state.

use std::sync::Arc;

use axum::{extract::Query, Json};
use tracing::warn;

use crate::arithmetic::{compute, validate_operands, Operation};
use crate::cache::Store;
use crate::error::Result;
use crate::models::{ArithmeticResult, OperandsQuery};

/// Application state shared across all handlers.
///
/// Holds the result store behind the [`Store`] trait so any implementation
/// can be injected.
#[derive(Clone)]
pub struct AppState {
    /// Cache of computed results, keyed by request URI
    pub store: Arc<dyn Store<ArithmeticResult>>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Arc<dyn Store<ArithmeticResult>>) -> Self {
        Self { store }
    }
}

/// Handler for GET /add
pub async fn add_handler(Query(query): Query<OperandsQuery>) -> Result<Json<ArithmeticResult>> {
    calculate(Operation::Add, &query)
}

/// Handler for GET /subtract
pub async fn subtract_handler(
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ArithmeticResult>> {
    calculate(Operation::Subtract, &query)
}

/// Handler for GET /multiply
pub async fn multiply_handler(
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ArithmeticResult>> {
    calculate(Operation::Multiply, &query)
}

/// Handler for GET /divide
pub async fn divide_handler(
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ArithmeticResult>> {
    calculate(Operation::Divide, &query)
}

fn calculate(op: Operation, query: &OperandsQuery) -> Result<Json<ArithmeticResult>> {
    if let Err(err) = validate_operands(&query.x, &query.y) {
        warn!(action = op.as_str(), error = %err, "Operand validation failed");
        return Err(err);
    }

    let result = compute(op, &query.x, &query.y).map_err(|err| {
        warn!(action = op.as_str(), error = %err, "Computation failed");
        err
    })?;

    Ok(Json(result))
}
