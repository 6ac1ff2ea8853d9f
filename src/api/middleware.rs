//! Result Caching Middleware
//!
//! Serves repeated requests from the [`Store`](crate::cache::Store) and
//! records fresh successful results, keyed by the full request URI.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use super::handlers::AppState;
use crate::error::ApiError;
use crate::models::ArithmeticResult;

/// Upper bound on a handler response body buffered for caching.
const MAX_CACHED_BODY: usize = 64 * 1024;

/// Returns a cached result when one exists, otherwise runs the handler and
/// caches its `200 OK` JSON body.
///
/// Responses served from the cache carry `"cached": true`.
pub async fn cache_result(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let key = request.uri().to_string();

    if let Some(mut result) = state.store.get_record(&key) {
        debug!(key = %key, "Serving result from cache");
        result.cached = true;
        return (StatusCode::OK, Json(result)).into_response();
    }

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_CACHED_BODY).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(key = %key, error = %err, "Failed to buffer response body");
            return ApiError::Internal("failed to read response body".to_string()).into_response();
        }
    };

    match serde_json::from_slice::<ArithmeticResult>(&bytes) {
        Ok(result) => {
            state.store.store_record(&key, result);
            debug!(key = %key, "Stored result in cache");
        }
        Err(err) => debug!(key = %key, error = %err, "Response is not cacheable"),
    }

    Response::from_parts(parts, Body::from(bytes))
}
