//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Absent keys are not errors: lookups return `None` and deletes return `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Value cannot fit even in an otherwise empty cache
    #[error("Value of {size} bytes exceeds cache capacity of {capacity} bytes")]
    ValueTooLarge { size: usize, capacity: usize },

    /// Configuration value could not be understood
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
