//! Usage Reporter Task
//!
//! Background task that periodically logs cache usage.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::shared::SharedCache;

/// Spawns a background task that logs a statistics snapshot every interval.
///
/// The task runs until aborted through the returned handle. An interval of
/// zero is treated as one second.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(BoundedCache::new(1024));
/// let reporter = spawn_usage_reporter(cache.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_usage_reporter(cache: SharedCache, report_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(report_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache usage reporter with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let stats = cache.stats().await;
            info!(
                used_bytes = stats.used_bytes,
                capacity_bytes = stats.capacity_bytes,
                entries = stats.total_entries,
                evictions = stats.evictions,
                rejections = stats.rejections,
                hit_rate = stats.hit_rate(),
                "cache usage"
            );
        }
    })
}
