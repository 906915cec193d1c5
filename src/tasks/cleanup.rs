//! Cache Sweep Task
//!
//! Background task that periodically removes expired post lists from the cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PostCache;

/// Spawns a background task that periodically drops expired cache entries.
///
/// Lookups already ignore expired entries; the sweep only reclaims memory for
/// users who stop reading.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<PostCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup_expired();
                (removed, cache_guard.stats())
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired post lists", removed);
            }
            debug!(
                entries = stats.total_entries,
                hits = stats.hits,
                misses = stats.misses,
                evictions = stats.evictions,
                hit_rate = stats.hit_rate(),
                "Cache sweep finished"
            );
        }
    })
}
