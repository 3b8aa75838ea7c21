//! Cache Module
//!
//! Provides a bounded-memory key/value cache with LRU or FIFO eviction.

mod entry;
mod policy;
mod stats;
mod store;
mod tracker;


// Re-export public types
pub use entry::CacheEntry;
pub use policy::EvictionPolicy;
pub use stats::CacheStats;
pub use store::BoundedCache;
pub use tracker::RecencyTracker;
