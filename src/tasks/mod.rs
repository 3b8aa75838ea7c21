//! Background Tasks Module
//!
//! Contains background tasks that run periodically next to a shared cache.
//!
//! # Tasks
//! - Usage reporter: logs cache usage and counters at a fixed interval

mod reporter;

pub use reporter::spawn_usage_reporter;
