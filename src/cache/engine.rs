//! Cache Engine Module
//!
//! Bounded key-value store combining LRU capacity eviction with sliding TTL
//! expiry. Every operation runs a maintenance sweep and then does its own
//! work inside one critical section.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyList};

// == Defaults ==
/// Capacity used when the cache is constructed with zero capacity.
pub const DEFAULT_CAPACITY: usize = 1000;

/// TTL used when the cache is constructed with a zero TTL.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

// == Cache ==
/// Thread-safe LRU cache with sliding TTL.
///
/// Reads count as touches: a successful [`get`](Cache::get) moves the entry
/// to the head of the recency list and pushes its deadline out by the full
/// TTL. There is no background eviction; expired and overflowing entries are
/// removed by whichever caller next enters the cache.
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: Mutex<Inner<K, V>>,
    capacity: usize,
    ttl: Duration,
}

#[derive(Debug)]
struct Inner<K, V> {
    /// Entries ordered by recency of last touch
    list: RecencyList<K, V>,
    /// Key to slot in `list`
    index: HashMap<K, usize>,
    stats: CacheStats,
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries, each living
    /// `ttl` past its last touch.
    ///
    /// A zero capacity or zero TTL falls back to [`DEFAULT_CAPACITY`] or
    /// [`DEFAULT_TTL`] so the cache is always usable.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = if capacity == 0 {
            debug!("Zero cache capacity given, using {}", DEFAULT_CAPACITY);
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        let ttl = if ttl.is_zero() {
            debug!("Zero cache TTL given, using {:?}", DEFAULT_TTL);
            DEFAULT_TTL
        } else {
            ttl
        };

        Self {
            inner: Mutex::new(Inner {
                list: RecencyList::new(),
                index: HashMap::new(),
                stats: CacheStats::new(),
            }),
            capacity,
            ttl,
        }
    }

    // == Put ==
    /// Inserts or overwrites the value for `key`.
    ///
    /// The entry becomes the most recently used and its deadline is reset to
    /// `ttl` from now.
    pub fn put(&self, key: K, value: V) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.sweep(self.capacity, Instant::now());

        if let Some(&idx) = inner.index.get(&key) {
            if let Some(entry) = inner.list.get_mut(idx) {
                entry.value = value;
                entry.refresh(self.ttl);
            }
            inner.list.move_to_front(idx);
            return;
        }

        let idx = inner
            .list
            .push_front(CacheEntry::new(key.clone(), value, self.ttl));
        inner.index.insert(key, idx);

        let evicted = inner.trim(self.capacity);
        if evicted > 0 {
            debug!(evicted, "Evicted least recently used entries on insert");
        }
    }

    // == Get ==
    /// Looks up `key`, returning a clone of its value.
    ///
    /// A hit refreshes the entry's deadline and recency.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.sweep(self.capacity, Instant::now());

        let hit = inner.index.get(key).copied().and_then(|idx| {
            let entry = inner.list.get_mut(idx)?;
            entry.refresh(self.ttl);
            let value = entry.value.clone();
            inner.list.move_to_front(idx);
            Some(value)
        });

        match hit {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        hit
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.list.len());
        stats
    }

    /// Keys from most to least recently touched. Does not count as a touch.
    pub fn keys(&self) -> Vec<K> {
        let inner = self.inner.lock();
        inner.list.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Number of entries currently stored, including any that have expired
    /// but not yet been swept.
    pub fn len(&self) -> usize {
        self.inner.lock().list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Panics if the key index and the recency list disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let inner = self.inner.lock();
        assert_eq!(inner.index.len(), inner.list.len(), "index/list size mismatch");
        assert_eq!(inner.list.iter().count(), inner.list.len(), "broken links");
        for (key, &idx) in &inner.index {
            let entry = inner.list.get(idx).expect("index points at empty slot");
            assert!(entry.key == *key, "index points at entry with another key");
        }
        assert!(inner.list.len() <= self.capacity, "over capacity");
    }
}

impl<K, V> Inner<K, V>
where
    K: Hash + Eq,
{
    // == Sweep ==
    /// Removes every expired entry, then trims down to `capacity`.
    ///
    /// The expiry scan walks the whole list from tail to head: entries are
    /// ordered by recency, not by deadline.
    fn sweep(&mut self, capacity: usize, now: Instant) {
        let mut expired = 0usize;
        let mut cursor = self.list.tail();

        while let Some(idx) = cursor {
            cursor = self.list.prev_of(idx);

            let is_expired = self
                .list
                .get(idx)
                .is_some_and(|entry| entry.is_expired(now));
            if !is_expired {
                continue;
            }

            if let Some(entry) = self.list.remove(idx) {
                self.index.remove(&entry.key);
                self.stats.record_expiration();
                expired += 1;
            }
        }

        let evicted = self.trim(capacity);

        if expired > 0 || evicted > 0 {
            debug!(
                expired,
                evicted,
                remaining = self.list.len(),
                "Cache sweep removed entries"
            );
        }
    }

    // == Trim ==
    /// Drops least recently used entries until at most `capacity` remain.
    fn trim(&mut self, capacity: usize) -> usize {
        let mut evicted = 0;
        while self.list.len() > capacity {
            match self.list.pop_back() {
                Some(entry) => {
                    self.index.remove(&entry.key);
                    self.stats.record_eviction();
                    evicted += 1;
                }
                None => break,
            }
        }
        evicted
    }
}
