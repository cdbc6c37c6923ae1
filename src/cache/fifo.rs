//! Insertion Order Module
//!
//! Tracks insertion order of cache keys for oldest-first capacity eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks insertion order for capacity eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently inserted
/// - Back = Oldest insertion
///
/// Reads never reorder keys; only a (re)insertion moves a key to the front.
#[derive(Debug)]
pub(crate) struct InsertionOrder<K> {
    /// Keys ordered by insertion time
    order: VecDeque<K>,
}

impl<K> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: PartialEq + Clone> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Record Insert ==
    /// Marks a key as the newest insertion.
    ///
    /// A key that is already tracked is moved to the front, since replacing
    /// an entry counts as a fresh insertion.
    pub(crate) fn record_insert(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub(crate) fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub(crate) fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
