//! Cache Entry Module
//!
//! Defines the structure for individual resident values.

// == Cache Entry ==
/// A single resident value with its recency stamp.
///
/// The value is an owned copy of the caller's bytes; its length is the size
/// charged against the cache capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Box<[u8]>,
    /// Position in the eviction order (higher = more recent)
    pub stamp: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry holding a deep copy of `value`.
    pub fn new(value: &[u8], stamp: u64) -> Self {
        Self {
            value: value.into(),
            stamp,
        }
    }

    // == Size ==
    /// Number of value bytes held by this entry.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
