//! TTL Cache Module
//!
//! Bounded key-value cache combining HashMap storage with LRU tracking and
//! fixed (non-sliding) TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == TTL Cache ==
/// Fixed-capacity, fixed-TTL cache.
///
/// Every entry lives for exactly `ttl_seconds` after it was put. Reads refresh
/// the entry's LRU position but never its expiry. When a put would exceed the
/// capacity, expired entries are purged first and then the least recently used
/// entry is evicted.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    lru: LruTracker<K>,
    stats: CacheStats,
    capacity: usize,
    ttl_seconds: u64,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries, each living
    /// `ttl_seconds`.
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            ttl_seconds,
        }
    }

    // == Get ==
    /// Returns a clone of the cached value, or `None` when absent or expired.
    ///
    /// An expired entry found here is removed and counted as a miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        self.lru.touch(key);
        Some(value)
    }

    // == Put ==
    /// Stores `value` under `key`, resetting its expiry.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            self.cleanup_expired();
        }

        while !is_overwrite && self.entries.len() >= self.capacity {
            match self.lru.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                }
                None => break,
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(value, self.ttl_seconds));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
