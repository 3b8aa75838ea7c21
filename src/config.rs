//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use crate::cache::EvictionPolicy;

/// Default value-byte ceiling (1 MiB)
pub const DEFAULT_MAXMEM: usize = 1024 * 1024;

/// Default interval for the usage reporter, in seconds
pub const DEFAULT_REPORT_INTERVAL: u64 = 60;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults,
/// or deserialized from any serde format (missing fields take their defaults).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum total value bytes the cache can hold
    pub maxmem: usize,
    /// Victim selection rule
    pub eviction_policy: EvictionPolicy,
    /// Usage reporter interval in seconds
    pub report_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAXMEM` - Capacity in value bytes (default: 1048576)
    /// - `CACHE_EVICTION_POLICY` - `lru` or `fifo` (default: lru)
    /// - `CACHE_REPORT_INTERVAL` - Usage report frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            maxmem: env::var("CACHE_MAXMEM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAXMEM),
            eviction_policy: env::var("CACHE_EVICTION_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            report_interval: env::var("CACHE_REPORT_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REPORT_INTERVAL),
        }
    }

    /// Returns a copy with a different capacity.
    pub fn with_maxmem(mut self, maxmem: usize) -> Self {
        self.maxmem = maxmem;
        self
    }

    /// Returns a copy with a different eviction policy.
    pub fn with_eviction_policy(mut self, policy: EvictionPolicy) -> Self {
        self.eviction_policy = policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maxmem: DEFAULT_MAXMEM,
            eviction_policy: EvictionPolicy::Lru,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}
