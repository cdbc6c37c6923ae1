//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking and TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::cache::fifo::InsertionOrder;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Cache Store ==
/// Bounded key-value store with a fixed TTL and oldest-first eviction.
///
/// The store never fails: losing an entry to expiry or eviction is always
/// a legal outcome and callers recompute on a miss.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Insertion order for capacity eviction
    order: InsertionOrder<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Time-to-live applied to every entry, in milliseconds
    ttl_ms: u64,
    /// Time source for insertion stamps and expiry checks
    clock: Arc<dyn Clock>,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore backed by the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `ttl_seconds` - Lifetime of every entry in seconds
    pub fn new(max_entries: usize, ttl_seconds: u64) -> Self {
        Self::with_clock(max_entries, ttl_seconds, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(max_entries: usize, ttl_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms: ttl_seconds.saturating_mul(1000),
            clock,
        }
    }

    // == Put ==
    /// Inserts or replaces the entry under `key`, stamped with the current time.
    ///
    /// Expired entries are purged first; if the store is still over capacity
    /// the oldest insertions are evicted until it fits.
    pub fn put(&mut self, key: K, value: V) {
        let now = self.clock.now_ms();
        self.purge_expired_at(now);

        self.entries.insert(key.clone(), CacheEntry::new(value, now));
        self.order.record_insert(&key);

        while self.entries.len() > self.max_entries {
            match self.order.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                }
                None => break,
            }
        }
        debug_assert_eq!(self.order.len(), self.entries.len());

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value under `key` if present and younger than the TTL.
    ///
    /// Reads never renew an entry. An expired entry found here is dropped
    /// and counted as a miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now, self.ttl_ms) => {
                self.stats.record_hit();
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Contains Fresh ==
    /// Checks for a live entry without touching statistics.
    pub fn contains_fresh(&self, key: &K) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now, self.ttl_ms))
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let removed = self.purge_expired_at(now);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    fn purge_expired_at(&mut self, now: u64) -> usize {
        let ttl_ms = self.ttl_ms;
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, ttl_ms))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.order.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_ms / 1000
    }
}
