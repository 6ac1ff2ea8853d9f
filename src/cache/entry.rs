//! Cache Entry Module
//!
//! Defines a single cache entry: key, value, sliding expiry deadline and the
//! intrusive links that place it in the recency list.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// `prev` points towards the head (more recently touched), `next` towards the
/// tail (less recently touched). Both are slot indices into the owning
/// [`RecencyList`](super::RecencyList).
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The key this entry is indexed under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Instant after which the entry is considered expired
    pub expires_at: Instant,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new, unlinked entry that expires `ttl` from now.
    pub fn new(key: K, value: V, ttl: Duration) -> Self {
        Self {
            key,
            value,
            expires_at: Instant::now() + ttl,
            prev: None,
            next: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired only once `now` is strictly after its deadline.
    pub fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    // == Refresh ==
    /// Pushes the deadline out to `ttl` from now (sliding TTL).
    pub fn refresh(&mut self, ttl: Duration) {
        self.expires_at = Instant::now() + ttl;
    }
}
