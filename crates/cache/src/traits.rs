//! The cache contract

use async_trait::async_trait;
use listo_core::Result;
use std::sync::Arc;
use std::time::Duration;

/// A string-to-string cache whose entries disappear after a TTL
///
/// Single-key operations are atomic. Concurrent `set` and `get` on the same
/// key carry no ordering guarantee, and an entry read at the instant of
/// its expiry may go either way.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Store `value` under `key` for `ttl`, replacing any previous entry
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Fetch the live value under `key`; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<C: KeyValueCache + ?Sized> KeyValueCache for Arc<C> {
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        (**self).set(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }
}
