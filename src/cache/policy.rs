//! Eviction Policy Module
//!
//! Decides which operations count as a "touch" for victim ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

// == Eviction Policy ==
/// Victim selection rule used by a cache.
///
/// Both policies evict the entry with the oldest recency stamp. They differ
/// only in whether a successful lookup refreshes that stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Least recently used: `set` and `get` both refresh an entry
    #[default]
    Lru,
    /// First in, first out: only `set` refreshes an entry
    Fifo,
}

impl EvictionPolicy {
    /// Returns true if a successful `get` moves the entry to the most recent end.
    pub fn touches_on_read(self) -> bool {
        matches!(self, EvictionPolicy::Lru)
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::Fifo => "fifo",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionPolicy::Lru),
            "fifo" => Ok(EvictionPolicy::Fifo),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown eviction policy '{}', expected 'lru' or 'fifo'",
                other
            ))),
        }
    }
}
