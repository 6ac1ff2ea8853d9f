//! Cache Store Module
//!
//! The record-store contract the serving layer depends on, and its in-memory
//! implementation backed by [`Cache`].

use std::time::Duration;

use crate::cache::{Cache, CacheStats};
use crate::config::Config;

// == Store Trait ==
/// Capability contract for storing and retrieving computed records.
///
/// Callers depend on this trait rather than on a concrete cache so that tests
/// can substitute their own implementation.
pub trait Store<V>: Send + Sync {
    /// Stores `value` under `key`, replacing any previous record.
    fn store_record(&self, key: &str, value: V);

    /// Returns the record stored under `key`, if it is still cached.
    fn get_record(&self, key: &str) -> Option<V>;
}

// == In Memory Store ==
/// [`Store`] implementation backed by an in-process LRU/TTL cache.
#[derive(Debug)]
pub struct InMemoryStore<V> {
    cache: Cache<String, V>,
}

impl<V: Clone> InMemoryStore<V> {
    /// Creates a store holding up to `capacity` records, each kept for `ttl`
    /// after its last access.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            cache: Cache::new(capacity, ttl),
        }
    }

    /// Creates a store sized from the cache section of the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_size, config.cache_ttl)
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<V> Store<V> for InMemoryStore<V>
where
    V: Clone + Send,
{
    fn store_record(&self, key: &str, value: V) {
        self.cache.put(key.to_string(), value);
    }

    fn get_record(&self, key: &str) -> Option<V> {
        self.cache.get(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_new_store() {
        let store: InMemoryStore<i32> = InMemoryStore::new(1, Duration::from_secs(1));
        assert_eq!(store.cache.capacity(), 1);
        assert_eq!(store.cache.ttl(), Duration::from_secs(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            cache_size: 42,
            cache_ttl: Duration::from_millis(1500),
            ..Config::default()
        };
        let store: InMemoryStore<i32> = InMemoryStore::from_config(&config);
        assert_eq!(store.cache.capacity(), 42);
        assert_eq!(store.cache.ttl(), Duration::from_millis(1500));
    }

    #[test]
    fn test_store_record() {
        let store = InMemoryStore::new(100, Duration::from_millis(100));

        store.store_record("1", 2);
        assert_eq!(store.len(), 1);

        store.store_record("3", 4);
        assert_eq!(store.len(), 2);

        store.store_record("5", 6);
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.cache.keys(),
            vec!["5".to_string(), "3".to_string(), "1".to_string()]
        );
    }

    #[test]
    fn test_get_record() {
        let store = InMemoryStore::new(100, Duration::from_millis(100));

        store.store_record("1", 2);
        assert_eq!(store.get_record("1"), Some(2));
        assert_eq!(store.get_record("2"), None);
    }

    #[test]
    fn test_idempotent_overwrite() {
        let store = InMemoryStore::new(100, Duration::from_secs(60));

        store.store_record("k", "v1");
        store.store_record("k", "v2");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_record("k"), Some("v2"));
    }

    #[test]
    fn test_record_ttl() {
        let store = InMemoryStore::new(100, Duration::from_millis(200));
        store.store_record("x", 5);

        sleep(Duration::from_millis(100));
        assert_eq!(store.get_record("x"), Some(5));

        sleep(Duration::from_millis(250));
        assert_eq!(store.get_record("x"), None);
    }

    #[test]
    fn test_cache_size() {
        let store = InMemoryStore::new(1, Duration::from_millis(100));

        store.store_record("a", 1);
        assert_eq!(store.get_record("a"), Some(1));

        store.store_record("b", 2);
        assert_eq!(store.get_record("a"), None);
        assert_eq!(store.get_record("b"), Some(2));
    }

    #[test]
    fn test_store_as_trait_object() {
        let store: Box<dyn Store<u8>> = Box::new(InMemoryStore::new(2, Duration::from_secs(60)));

        store.store_record("k1", 1);
        store.store_record("k2", 2);
        assert_eq!(store.get_record("k1"), Some(1));
        store.store_record("k3", 3);

        assert_eq!(store.get_record("k2"), None);
        assert_eq!(store.get_record("k1"), Some(1));
        assert_eq!(store.get_record("k3"), Some(3));
    }
}
