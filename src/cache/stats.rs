//! Cache Statistics Module
//!
//! Tracks lookup outcomes, evictions, rejected insertions and memory usage.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache counters and usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for absent keys
    pub misses: u64,
    /// Number of entries removed to make room for insertions
    pub evictions: u64,
    /// Number of insertions refused because the value exceeds capacity
    pub rejections: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Current sum of resident value sizes in bytes
    pub used_bytes: usize,
    /// Fixed value-byte ceiling of the cache
    pub capacity_bytes: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Fill Ratio ==
    /// Fraction of the capacity occupied by values, 0.0 for a zero-capacity cache.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.capacity_bytes as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    // == Update Usage ==
    /// Copies the live entry count and byte figures into the snapshot.
    pub fn set_usage(&mut self, total_entries: usize, used_bytes: usize, capacity_bytes: usize) {
        self.total_entries = total_entries;
        self.used_bytes = used_bytes;
        self.capacity_bytes = capacity_bytes;
    }
}
