//! Arith Cache - arithmetic API backed by an in-process result cache
//!
//! Provides an LRU cache with sliding TTL expiry and an HTTP API that uses it
//! to avoid recomputing recently served results.

pub mod api;
pub mod arithmetic;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, InMemoryStore, Store};
pub use config::Config;
