//! Share code to token mapping in the ephemeral cache

use crate::code::ShareCode;
use listo_cache::KeyValueCache;
use listo_core::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

const KEY_PREFIX: &str = "share-code:";

/// Stores issued tokens under their share code for a fixed retention
#[derive(Clone)]
pub struct ShortCodeCache {
    cache: Arc<dyn KeyValueCache>,
    retention: Duration,
}

impl ShortCodeCache {
    pub fn new(cache: Arc<dyn KeyValueCache>, retention: Duration) -> Self {
        Self { cache, retention }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub async fn put(&self, code: &ShareCode, token: String) -> Result<()> {
        self.cache.set(&cache_key(code), token, self.retention).await
    }

    /// Token stored under `code`; a miss is [`Error::ShareCodeInvalid`]
    pub async fn get(&self, code: &ShareCode) -> Result<String> {
        self.cache
            .get(&cache_key(code))
            .await?
            .ok_or_else(|| Error::share_code_invalid(code.as_str()))
    }
}

fn cache_key(code: &ShareCode) -> String {
    format!("{KEY_PREFIX}{code}")
}
