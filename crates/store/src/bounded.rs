//! Timeout decorator for any item store

use crate::item::{Item, Key};
use crate::schema::Table;
use crate::traits::{ItemStore, WriteOp};
use async_trait::async_trait;
use listo_core::{resilience::with_timeout, Result, DEFAULT_STORE_TIMEOUT};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BoundedStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: ItemStore> BoundedStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn with_default_timeout(inner: S) -> Self {
        Self::new(inner, DEFAULT_STORE_TIMEOUT)
    }
}

#[async_trait]
impl<S: ItemStore> ItemStore for BoundedStore<S> {
    async fn get(&self, table: Table, key: &Key) -> Result<Option<Item>> {
        with_timeout("store.get", self.timeout, self.inner.get(table, key)).await
    }

    async fn query(&self, table: Table, partition: &str, sort_prefix: &str) -> Result<Vec<Item>> {
        with_timeout(
            "store.query",
            self.timeout,
            self.inner.query(table, partition, sort_prefix),
        )
        .await
    }

    async fn write(&self, op: WriteOp) -> Result<()> {
        with_timeout("store.write", self.timeout, self.inner.write(op)).await
    }

    async fn transact_write(&self, ops: Vec<WriteOp>) -> Result<()> {
        with_timeout(
            "store.transact_write",
            self.timeout,
            self.inner.transact_write(ops),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use listo_core::Error;

    struct StalledStore;

    #[async_trait]
    impl ItemStore for StalledStore {
        async fn get(&self, _table: Table, _key: &Key) -> Result<Option<Item>> {
            std::future::pending().await
        }

        async fn query(&self, _table: Table, _p: &str, _s: &str) -> Result<Vec<Item>> {
            std::future::pending().await
        }

        async fn write(&self, _op: WriteOp) -> Result<()> {
            std::future::pending().await
        }

        async fn transact_write(&self, _ops: Vec<WriteOp>) -> Result<()> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_times_out() {
        let store = BoundedStore::new(StalledStore, Duration::from_millis(250));

        let err = store
            .get(Table::Users, &Key::new("USER#u1", "PROFILE"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout { ref operation, .. } if operation == "store.get"));

        let err = store.transact_write(Vec::new()).await.unwrap_err();
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_default_methods_route_through_the_bound() -> Result<()> {
        let store = BoundedStore::with_default_timeout(MemoryStore::new());
        let key = Key::new("USER#u1", "PROFILE");

        store
            .put(Table::Users, Item::new(key.clone()), Default::default())
            .await?;
        assert!(store.get(Table::Users, &key).await?.is_some());
        Ok(())
    }
}
