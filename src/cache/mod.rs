//! Cache Module
//!
//! Provides the in-process LRU cache with sliding TTL expiry and the record
//! store facade the serving layer talks to.

mod engine;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use engine::{Cache, DEFAULT_CAPACITY, DEFAULT_TTL};
pub(crate) use entry::CacheEntry;
pub(crate) use lru::RecencyList;
pub use stats::CacheStats;
pub use store::{InMemoryStore, Store};
