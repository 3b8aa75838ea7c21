//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and
//! byte-based capacity accounting.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, RecencyTracker};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// In-process key/value cache with a hard ceiling on stored value bytes.
///
/// Keys and values are deep-copied on insertion. Only value bytes count
/// against the capacity. When an insertion would exceed the capacity, entries
/// are evicted oldest-stamp first until the new value fits.
///
/// The cache does no locking of its own; see [`crate::SharedCache`] for a
/// handle that can be shared between tasks.
#[derive(Debug)]
pub struct BoundedCache<S = RandomState> {
    /// Key-value storage
    entries: HashMap<Box<[u8]>, CacheEntry, S>,
    /// Eviction order over the same key set as `entries`
    tracker: RecencyTracker,
    /// Performance counters
    stats: CacheStats,
    /// Maximum value bytes allowed
    capacity: usize,
    /// Sum of value bytes currently resident
    used: usize,
    /// Whether reads refresh recency
    policy: EvictionPolicy,
}

impl BoundedCache {
    // == Constructors ==
    /// Creates an empty LRU cache holding at most `capacity` value bytes.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, EvictionPolicy::default())
    }

    /// Creates an empty cache with an explicit eviction policy.
    pub fn with_policy(capacity: usize, policy: EvictionPolicy) -> Self {
        Self::with_hasher(capacity, policy, RandomState::new())
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(config.maxmem, config.eviction_policy)
    }
}

impl<S: BuildHasher> BoundedCache<S> {
    /// Creates an empty cache whose index uses the given hash builder.
    pub fn with_hasher(capacity: usize, policy: EvictionPolicy, hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
            tracker: RecencyTracker::new(),
            stats: CacheStats::new(),
            capacity,
            used: 0,
            policy,
        }
    }

    // == Set ==
    /// Stores a copy of `value` under a copy of `key`.
    ///
    /// If the key already exists, its value is replaced. Entries are evicted
    /// as needed to make room. A value larger than the whole capacity is
    /// silently dropped; use [`try_set`](Self::try_set) to observe that.
    pub fn set(&mut self, key: impl AsRef<[u8]>, value: &[u8]) {
        // Rejections are counted and logged by try_set.
        let _ = self.try_set(key, value);
    }

    /// Stores a copy of `value` under a copy of `key`, reporting rejection.
    ///
    /// Eviction is not rolled back: when the value cannot fit even in an
    /// empty cache, every entry has already been evicted by the time
    /// `ValueTooLarge` is returned, and a previous value under `key` is gone.
    pub fn try_set(&mut self, key: impl AsRef<[u8]>, value: &[u8]) -> Result<()> {
        let key = key.as_ref();
        let size = value.len();

        // The replaced value is released before any victim is chosen.
        let reused_key = match self.entries.remove_entry(key) {
            Some((owned, previous)) => {
                self.tracker.remove(previous.stamp);
                self.used -= previous.len();
                Some(owned)
            }
            None => None,
        };

        while self.used.saturating_add(size) > self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }

        if self.used.saturating_add(size) > self.capacity {
            self.stats.record_rejection();
            debug!(
                key = %String::from_utf8_lossy(key),
                size,
                capacity = self.capacity,
                "insertion rejected"
            );
            return Err(CacheError::ValueTooLarge {
                size,
                capacity: self.capacity,
            });
        }

        let stamp = self.tracker.insert(key);
        let owned = reused_key.unwrap_or_else(|| key.into());
        self.entries.insert(owned, CacheEntry::new(value, stamp));
        self.used += size;

        Ok(())
    }

    // == Get ==
    /// Retrieves a view of the value stored under `key`.
    ///
    /// Under [`EvictionPolicy::Lru`] a hit also makes the entry the most
    /// recently used. A miss leaves the cache untouched apart from the miss
    /// counter.
    pub fn get(&mut self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        let Some(entry) = self.entries.get_mut(key.as_ref()) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        if self.policy.touches_on_read() {
            if let Some(stamp) = self.tracker.touch(entry.stamp) {
                entry.stamp = stamp;
            }
        }

        Some(&*entry.value)
    }

    // == Peek ==
    /// Retrieves a view of the value without touching recency or stats.
    pub fn peek(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.entries.get(key.as_ref()).map(|entry| &*entry.value)
    }

    /// Returns true if `key` is resident.
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns true if the key was found and removed.
    pub fn delete(&mut self, key: impl AsRef<[u8]>) -> bool {
        match self.entries.remove(key.as_ref()) {
            Some(entry) => {
                self.tracker.remove(entry.stamp);
                self.used -= entry.len();
                true
            }
            None => false,
        }
    }

    // == Space Used ==
    /// Total bytes occupied by resident values (keys are not counted).
    pub fn space_used(&self) -> usize {
        self.used
    }

    // == Reset ==
    /// Removes every entry. Capacity and policy are kept.
    pub fn reset(&mut self) {
        let dropped = self.entries.len();

        self.entries.clear();
        self.tracker.clear();
        self.stats = CacheStats::new();
        self.used = 0;

        info!(dropped, capacity = self.capacity, "cache reset");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.entries.len(), self.used, self.capacity);
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Eviction Order ==
    /// Iterates resident keys starting with the next victim.
    pub fn eviction_order(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.tracker.iter()
    }

    /// Returns the key that would be evicted next.
    pub fn peek_victim(&self) -> Option<&[u8]> {
        self.tracker.peek_oldest()
    }

    /// Evicts the oldest entry. Returns false if there was nothing to evict.
    fn evict_oldest(&mut self) -> bool {
        let Some(victim) = self.tracker.evict_oldest() else {
            return false;
        };

        if let Some(entry) = self.entries.remove(&*victim) {
            self.used -= entry.len();
            self.stats.record_eviction();
            debug!(
                key = %String::from_utf8_lossy(&victim),
                size = entry.len(),
                used = self.used,
                "evicted entry"
            );
        }

        true
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::BuildHasherDefault;

    fn order(cache: &BoundedCache) -> Vec<Vec<u8>> {
        cache.eviction_order().map(|key| key.to_vec()).collect()
    }

    #[test]
    fn test_store_new() {
        let cache = BoundedCache::new(20);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.space_used(), 0);
        assert_eq!(cache.capacity(), 20);
        assert_eq!(cache.policy(), EvictionPolicy::Lru);
    }

    #[test]
    fn test_store_set_and_get() {
        let mut cache = BoundedCache::new(20);

        cache.set("key1", b"value1");

        assert_eq!(cache.get("key1"), Some(&b"value1"[..]));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.space_used(), 6);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut cache = BoundedCache::new(20);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_store_delete() {
        let mut cache = BoundedCache::new(20);

        cache.set("key1", b"value1");

        assert!(cache.delete("key1"));
        assert!(cache.is_empty());
        assert_eq!(cache.space_used(), 0);
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.peek_victim(), None);
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut cache = BoundedCache::new(20);
        cache.set("key1", b"value1");

        assert!(!cache.delete("nonexistent"));
        assert_eq!(cache.space_used(), 6);
    }

    #[test]
    fn test_store_overwrite() {
        let mut cache = BoundedCache::new(20);

        cache.set("key1", b"value1");
        cache.set("key1", b"v2");

        assert_eq!(cache.get("key1"), Some(&b"v2"[..]));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.space_used(), 2);
    }

    #[test]
    fn test_store_overwrite_refreshes_order() {
        let mut cache = BoundedCache::new(20);

        cache.set("a", b"1");
        cache.set("b", b"2");
        cache.set("a", b"3");

        assert_eq!(order(&cache), vec![b"b".to_vec(), b"a".to_vec()]);
    }

    #[test]
    fn test_store_evicts_until_value_fits() {
        let mut cache = BoundedCache::new(10);

        cache.set("a", &[1; 4]);
        cache.set("b", &[2; 4]);
        cache.set("c", &[3; 2]);
        assert_eq!(cache.space_used(), 10);

        // Needs 6 bytes: evicting a frees 4, evicting b frees 4 more
        cache.set("d", &[4; 6]);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(&[3u8; 2][..]));
        assert_eq!(cache.get("d"), Some(&[4u8; 6][..]));
        assert_eq!(cache.space_used(), 8);
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn test_store_overwrite_growth_evicts_others() {
        let mut cache = BoundedCache::new(20);

        cache.set("a", &[0; 8]);
        cache.set("b", &[0; 8]);
        cache.set("a", &[1; 15]);

        assert!(!cache.contains_key("b"));
        assert_eq!(cache.peek("a"), Some(&[1u8; 15][..]));
        assert_eq!(cache.space_used(), 15);
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut cache = BoundedCache::new(3);

        cache.set("key1", b"1");
        cache.set("key2", b"2");
        cache.set("key3", b"3");

        // Access key1 to make it most recently used
        cache.get("key1").unwrap();

        // Adding key4 should evict key2 (now oldest)
        cache.set("key4", b"4");

        assert!(cache.contains_key("key1"));
        assert!(!cache.contains_key("key2"));
    }

    #[test]
    fn test_store_fifo_ignores_get() {
        let mut cache = BoundedCache::with_policy(3, EvictionPolicy::Fifo);

        cache.set("key1", b"1");
        cache.set("key2", b"2");
        cache.set("key3", b"3");

        cache.get("key1").unwrap();
        cache.set("key4", b"4");

        assert!(!cache.contains_key("key1"));
        assert!(cache.contains_key("key2"));
    }

    #[test]
    fn test_store_get_miss_keeps_order() {
        let mut cache = BoundedCache::new(20);

        cache.set("a", b"1");
        cache.set("b", b"2");
        let before = order(&cache);

        assert_eq!(cache.get("zzz"), None);

        assert_eq!(order(&cache), before);
        assert_eq!(cache.space_used(), 2);
    }

    #[test]
    fn test_store_peek_does_not_touch() {
        let mut cache = BoundedCache::new(2);

        cache.set("a", b"1");
        cache.set("b", b"2");
        assert_eq!(cache.peek("a"), Some(&b"1"[..]));

        cache.set("c", b"3");

        assert!(!cache.contains_key("a"));
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_store_oversized_rejected_after_eviction() {
        let mut cache = BoundedCache::new(20);

        cache.set("a", &[0; 8]);
        cache.set("b", &[0; 3]);

        let result = cache.try_set("huge", &[0; 21]);

        assert_eq!(
            result,
            Err(CacheError::ValueTooLarge {
                size: 21,
                capacity: 20
            })
        );
        // Evictions made while trying are not undone
        assert!(cache.is_empty());
        assert_eq!(cache.space_used(), 0);
        assert_eq!(cache.get("huge"), None);

        let stats = cache.stats();
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.rejections, 1);
    }

    #[test]
    fn test_store_oversized_overwrite_drops_old_value() {
        let mut cache = BoundedCache::new(20);

        cache.set("a", b"small");
        cache.set("a", &[0; 64]);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.space_used(), 0);
    }

    #[test]
    fn test_store_zero_capacity() {
        let mut cache = BoundedCache::new(0);

        cache.set("a", b"x");
        assert_eq!(cache.get("a"), None);

        // An empty value costs nothing and still fits
        cache.set("empty", b"");
        assert_eq!(cache.get("empty"), Some(&b""[..]));
        assert_eq!(cache.space_used(), 0);
    }

    #[test]
    fn test_store_exact_capacity_fits() {
        let mut cache = BoundedCache::new(8);

        cache.set("a", &[7; 8]);

        assert_eq!(cache.space_used(), 8);
        assert!(cache.contains_key("a"));
    }

    #[test]
    fn test_store_binary_keys_and_values() {
        let mut cache = BoundedCache::new(20);

        cache.set([0u8, 1, 0], &[0, 0, 0, 255]);
        cache.set(vec![0u8, 1], b"other");

        assert_eq!(cache.get([0u8, 1, 0]), Some(&[0u8, 0, 0, 255][..]));
        assert_eq!(cache.get(vec![0u8, 1]), Some(&b"other"[..]));
        assert_eq!(cache.space_used(), 9);
    }

    #[test]
    fn test_store_stats() {
        let mut cache = BoundedCache::new(20);

        cache.set("key1", b"value1");
        cache.get("key1").unwrap(); // hit
        let _ = cache.get("nonexistent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.used_bytes, 6);
        assert_eq!(stats.capacity_bytes, 20);
    }

    #[test]
    fn test_store_reset() {
        let mut cache = BoundedCache::with_policy(20, EvictionPolicy::Fifo);

        cache.set("a", b"1");
        cache.set("b", b"2");
        cache.get("a");
        cache.reset();

        assert!(cache.is_empty());
        assert_eq!(cache.space_used(), 0);
        assert_eq!(cache.peek_victim(), None);
        assert_eq!(cache.capacity(), 20);
        assert_eq!(cache.policy(), EvictionPolicy::Fifo);
        assert_eq!(cache.stats(), BoundedCache::with_policy(20, EvictionPolicy::Fifo).stats());
    }

    #[test]
    fn test_store_from_config() {
        let config = Config::default()
            .with_maxmem(64)
            .with_eviction_policy(EvictionPolicy::Fifo);

        let cache = BoundedCache::from_config(&config);

        assert_eq!(cache.capacity(), 64);
        assert_eq!(cache.policy(), EvictionPolicy::Fifo);
    }

    #[test]
    fn test_store_custom_hasher() {
        let hasher = BuildHasherDefault::<DefaultHasher>::default();
        let mut cache = BoundedCache::with_hasher(20, EvictionPolicy::Lru, hasher);

        cache.set("Item 1", b"3.14159\0");

        assert_eq!(cache.get("Item 1"), Some(&b"3.14159\0"[..]));
    }
}
