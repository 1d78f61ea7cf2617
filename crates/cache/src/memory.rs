//! In-process TTL cache

use crate::cleanup::start_cleanup_task;
use crate::traits::KeyValueCache;
use async_trait::async_trait;
use dashmap::DashMap;
use listo_core::{Error, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub(crate) value: String,
    pub(crate) expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
pub(crate) struct CacheInner {
    pub(crate) entries: DashMap<String, CacheEntry>,
    pub(crate) cleanup_handle: Mutex<Option<JoinHandle<()>>>,
}

impl CacheInner {
    /// Drop every entry whose TTL has run out, returning how many went
    pub(crate) fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        before.saturating_sub(self.entries.len())
    }
}

impl Drop for CacheInner {
    fn drop(&mut self) {
        if let Some(handle) = self.cleanup_handle.get_mut().take() {
            handle.abort();
        }
    }
}

/// DashMap-backed cache with per-entry expiry
///
/// Expired entries are never returned. They are removed lazily on read and
/// in bulk by the optional background sweeper.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    pub(crate) inner: Arc<CacheInner>,
}

impl MemoryCache {
    /// Create an empty cache without a sweeper
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache and sweep expired entries every `cleanup_interval`
    ///
    /// Must be called inside a tokio runtime. A zero interval disables the
    /// sweeper.
    pub fn with_cleanup(cleanup_interval: Duration) -> Self {
        let cache = Self::new();
        start_cleanup_task(&cache, cleanup_interval);
        cache
    }

    /// Number of stored entries, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Remove expired entries now
    pub fn purge_expired(&self) -> usize {
        self.inner.purge_expired()
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        if ttl.is_zero() {
            return Err(Error::validation("ttl", "must be positive"));
        }
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.inner.entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let found = self
            .inner
            .entries
            .get(key)
            .map(|entry| entry.is_live(now).then(|| entry.value.clone()));

        match found {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                self.inner
                    .entries
                    .remove_if(key, |_, entry| !entry.is_live(now));
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_basic_operations() -> Result<()> {
        let cache = MemoryCache::new();

        cache
            .set("9f86d081884", "token".to_string(), Duration::from_secs(60))
            .await?;
        assert_eq!(cache.get("9f86d081884").await?, Some("token".to_string()));
        assert_eq!(cache.get("missing").await?, None);
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration() -> Result<()> {
        let cache = MemoryCache::new();
        cache
            .set("code", "token".to_string(), Duration::from_secs(10))
            .await?;

        tokio::time::advance(Duration::from_secs(9)).await;
        assert_eq!(cache.get("code").await?, Some("token".to_string()));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get("code").await?, None);
        assert!(cache.is_empty(), "expired entry should be dropped on read");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_ttl() -> Result<()> {
        let cache = MemoryCache::new();
        cache
            .set("code", "first".to_string(), Duration::from_secs(5))
            .await?;
        tokio::time::advance(Duration::from_secs(4)).await;
        cache
            .set("code", "second".to_string(), Duration::from_secs(5))
            .await?;
        tokio::time::advance(Duration::from_secs(4)).await;

        assert_eq!(cache.get("code").await?, Some("second".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_ttl_is_rejected() {
        let cache = MemoryCache::new();
        let err = cache
            .set("code", "token".to_string(), Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_expired() -> Result<()> {
        let cache = MemoryCache::new();
        cache
            .set("short", "a".to_string(), Duration::from_secs(1))
            .await?;
        cache
            .set("long", "b".to_string(), Duration::from_secs(100))
            .await?;

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("long").await?, Some("b".to_string()));
        Ok(())
    }
}
