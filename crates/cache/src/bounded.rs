//! Timeout decorator for any cache

use crate::traits::KeyValueCache;
use async_trait::async_trait;
use listo_core::{resilience::with_timeout, Result, DEFAULT_CACHE_TIMEOUT};
use std::time::Duration;

/// Wraps a cache so that no call waits longer than `timeout`
#[derive(Debug, Clone)]
pub struct BoundedCache<C> {
    inner: C,
    timeout: Duration,
}

impl<C: KeyValueCache> BoundedCache<C> {
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn with_default_timeout(inner: C) -> Self {
        Self::new(inner, DEFAULT_CACHE_TIMEOUT)
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: KeyValueCache> KeyValueCache for BoundedCache<C> {
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        with_timeout("cache.set", self.timeout, self.inner.set(key, value, ttl)).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        with_timeout("cache.get", self.timeout, self.inner.get(key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCache;
    use listo_core::Error;

    struct StalledCache;

    #[async_trait]
    impl KeyValueCache for StalledCache {
        async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<()> {
            std::future::pending().await
        }

        async fn get(&self, _key: &str) -> Result<Option<String>> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_backend_times_out() {
        let cache = BoundedCache::new(StalledCache, Duration::from_millis(100));

        let err = cache.get("code").await.unwrap_err();
        assert!(matches!(err, Error::Timeout { ref operation, .. } if operation == "cache.get"));
        assert!(err.is_transient());

        let err = cache
            .set("code", "token".to_string(), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_healthy_backend_passes_through() -> Result<()> {
        let cache = BoundedCache::with_default_timeout(MemoryCache::new());
        cache
            .set("code", "token".to_string(), Duration::from_secs(60))
            .await?;
        assert_eq!(cache.get("code").await?, Some("token".to_string()));
        assert_eq!(cache.inner().len(), 1);
        Ok(())
    }
}
