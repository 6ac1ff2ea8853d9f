//! API Module
//!
//! HTTP handlers, result caching middleware and routing for the arithmetic
//! API.
//!
//! # Endpoints
//! - `GET /add` - x + y
//! - `GET /subtract` - x - y
//! - `GET /multiply` - x * y
//! - `GET /divide` - x / y

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use middleware::cache_result;
pub use routes::create_router;
