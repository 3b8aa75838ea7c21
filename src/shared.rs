//! Shared Cache Handle
//!
//! Wraps a [`BoundedCache`] for use from many tasks at once.
//!
//! The cache itself does no locking. This handle serializes every operation
//! through a single `tokio::sync::Mutex`. A `RwLock` would not help: under
//! LRU every hit rewrites the eviction order, so lookups are writers too.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::cache::{BoundedCache, CacheStats};
use crate::config::Config;
use crate::error::Result;

/// Clonable, thread-safe handle to one cache.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<BoundedCache>>,
}

impl SharedCache {
    /// Wraps an existing cache.
    pub fn new(cache: BoundedCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new shared cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(BoundedCache::from_config(config))
    }

    /// Stores a copy of `value` under `key`.
    ///
    /// Unlike [`BoundedCache::set`], a value larger than the capacity is
    /// reported as `CacheError::ValueTooLarge`.
    pub async fn set(&self, key: impl AsRef<[u8]>, value: &[u8]) -> Result<()> {
        self.inner.lock().await.try_set(key, value)
    }

    /// Returns an owned copy of the value, since a view cannot outlive the lock.
    pub async fn get(&self, key: impl AsRef<[u8]>) -> Option<Vec<u8>> {
        self.inner.lock().await.get(key).map(<[u8]>::to_vec)
    }

    pub async fn delete(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.lock().await.delete(key)
    }

    pub async fn space_used(&self) -> usize {
        self.inner.lock().await.space_used()
    }

    pub async fn reset(&self) {
        self.inner.lock().await.reset();
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    /// Locks the cache for several operations in one critical section.
    ///
    /// Views returned by `get` on the guard stay valid while the guard lives.
    pub async fn lock(&self) -> MutexGuard<'_, BoundedCache> {
        self.inner.lock().await
    }
}
