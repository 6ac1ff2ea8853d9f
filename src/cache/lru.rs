//! Recency List Module
//!
//! Implements the recency ordering used for LRU eviction as an arena of
//! entries linked by slot index.

use crate::cache::CacheEntry;

// == Recency List ==
/// Doubly linked list of cache entries stored in a slot arena.
///
/// - Head = most recently touched
/// - Tail = least recently touched
///
/// Slot indices stay stable for the lifetime of an entry, so the key index can
/// address entries directly. Freed slots are recycled through `free`.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    slots: Vec<Option<CacheEntry<K, V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry at the head and returns its slot index.
    pub fn push_front(&mut self, entry: CacheEntry<K, V>) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                idx
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the entry at `idx` as most recently touched.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || self.get(idx).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Unlinks and returns the entry at `idx`, freeing its slot.
    pub fn remove(&mut self, idx: usize) -> Option<CacheEntry<K, V>> {
        self.get(idx)?;
        self.unlink(idx);

        let entry = self.slots.get_mut(idx)?.take();
        self.free.push(idx);
        self.len -= 1;
        entry
    }

    // == Pop Back ==
    /// Removes and returns the least recently touched entry.
    pub fn pop_back(&mut self) -> Option<CacheEntry<K, V>> {
        let tail = self.tail?;
        self.remove(tail)
    }

    pub fn get(&self, idx: usize) -> Option<&CacheEntry<K, V>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut CacheEntry<K, V>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    /// Slot of the least recently touched entry.
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Slot of the neighbour one step closer to the head.
    pub fn prev_of(&self, idx: usize) -> Option<usize> {
        self.get(idx)?.prev
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // == Iter ==
    /// Iterates entries from head (most recent) to tail (least recent).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(entry) = self.get_mut(idx) {
            entry.prev = None;
            entry.next = old_head;
        }

        match old_head {
            Some(head) => {
                if let Some(entry) = self.get_mut(head) {
                    entry.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.get(idx) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(entry) = self.get_mut(p) {
                    entry.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(entry) = self.get_mut(n) {
                    entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(entry) = self.get_mut(idx) {
            entry.prev = None;
            entry.next = None;
        }
    }
}

/// Head-to-tail iterator over a [`RecencyList`].
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a CacheEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.cursor?)?;
        self.cursor = entry.next;
        Some(entry)
    }
}
