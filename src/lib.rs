//! maxmem_cache - A bounded-memory in-process key/value cache
//!
//! Stores byte values under byte keys, caps the total value bytes at a fixed
//! capacity and evicts least recently used entries to make room.

pub mod cache;
pub mod config;
pub mod error;
pub mod shared;
pub mod tasks;

pub use cache::{BoundedCache, CacheStats, EvictionPolicy};
pub use config::Config;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
pub use tasks::spawn_usage_reporter;
