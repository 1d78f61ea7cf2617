//! Background sweeping of expired cache entries

use crate::memory::MemoryCache;
use std::sync::Arc;
use std::time::Duration;

/// Start the background cleanup task for `cache`
///
/// The task holds only a weak reference, so it ends on its own once the
/// last handle to the cache is dropped.
pub fn start_cleanup_task(cache: &MemoryCache, cleanup_interval: Duration) {
    if cleanup_interval == Duration::ZERO {
        return;
    }

    let weak = Arc::downgrade(&cache.inner);
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let Some(inner) = weak.upgrade() else {
                break;
            };
            let purged = inner.purge_expired();
            if purged > 0 {
                tracing::debug!(purged, "Swept expired cache entries");
            }
        }
    });

    if let Some(previous) = cache.inner.cleanup_handle.lock().replace(handle) {
        previous.abort();
    }
}
