//! API Routes
//!
//! Configures the Axum router with all arithmetic endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{add_handler, divide_handler, multiply_handler, subtract_handler, AppState};
use super::middleware::cache_result;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /add?x=..&y=..`
/// - `GET /subtract?x=..&y=..`
/// - `GET /multiply?x=..&y=..`
/// - `GET /divide?x=..&y=..`
///
/// # Middleware
/// - Result caching on matched routes, keyed by request URI
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/add", get(add_handler))
        .route("/subtract", get(subtract_handler))
        .route("/multiply", get(multiply_handler))
        .route("/divide", get(divide_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), cache_result))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
