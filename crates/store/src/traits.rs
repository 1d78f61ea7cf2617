//! The item-store contract

use crate::item::{Attributes, Item, Key};
use crate::schema::Table;
use async_trait::async_trait;
use listo_core::Result;
use std::sync::Arc;

/// Largest number of writes accepted in one transaction
pub const MAX_TRANSACTION_ITEMS: usize = 100;

/// Precondition on the current state of the targeted item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    None,
    Exists,
    NotExists,
}

/// One write, applied alone or as part of a transaction
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Replace the whole item
    Put {
        table: Table,
        item: Item,
        condition: Condition,
    },
    /// Set the given attributes, creating the item if it is absent
    Update {
        table: Table,
        key: Key,
        set: Attributes,
        condition: Condition,
    },
    Delete {
        table: Table,
        key: Key,
        condition: Condition,
    },
}

impl WriteOp {
    pub fn table(&self) -> Table {
        match self {
            Self::Put { table, .. } | Self::Update { table, .. } | Self::Delete { table, .. } => {
                *table
            }
        }
    }

    pub fn key(&self) -> &Key {
        match self {
            Self::Put { item, .. } => &item.key,
            Self::Update { key, .. } | Self::Delete { key, .. } => key,
        }
    }

    pub fn condition(&self) -> Condition {
        match self {
            Self::Put { condition, .. }
            | Self::Update { condition, .. }
            | Self::Delete { condition, .. } => *condition,
        }
    }
}

/// A durable single-table key-value store
///
/// Single-item writes are atomic. A failed [`Condition`] surfaces as
/// `Error::ConditionFailed` and leaves the item untouched. Transport
/// failures surface as `Error::StorageUnavailable` or `Error::Timeout`.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn get(&self, table: Table, key: &Key) -> Result<Option<Item>>;

    /// Every item in `partition` whose sort key starts with `sort_prefix`,
    /// in sort-key order
    async fn query(&self, table: Table, partition: &str, sort_prefix: &str) -> Result<Vec<Item>>;

    async fn write(&self, op: WriteOp) -> Result<()>;

    /// Apply every write or none of them
    ///
    /// Fails with `Error::Validation` for more than
    /// [`MAX_TRANSACTION_ITEMS`] writes or two writes to the same key.
    async fn transact_write(&self, ops: Vec<WriteOp>) -> Result<()>;

    async fn put(&self, table: Table, item: Item, condition: Condition) -> Result<()> {
        self.write(WriteOp::Put {
            table,
            item,
            condition,
        })
        .await
    }

    async fn update(
        &self,
        table: Table,
        key: Key,
        set: Attributes,
        condition: Condition,
    ) -> Result<()> {
        self.write(WriteOp::Update {
            table,
            key,
            set,
            condition,
        })
        .await
    }

    async fn delete(&self, table: Table, key: Key, condition: Condition) -> Result<()> {
        self.write(WriteOp::Delete {
            table,
            key,
            condition,
        })
        .await
    }
}

pub type SharedStore = Arc<dyn ItemStore>;

#[async_trait]
impl<S: ItemStore + ?Sized> ItemStore for Arc<S> {
    async fn get(&self, table: Table, key: &Key) -> Result<Option<Item>> {
        (**self).get(table, key).await
    }

    async fn query(&self, table: Table, partition: &str, sort_prefix: &str) -> Result<Vec<Item>> {
        (**self).query(table, partition, sort_prefix).await
    }

    async fn write(&self, op: WriteOp) -> Result<()> {
        (**self).write(op).await
    }

    async fn transact_write(&self, ops: Vec<WriteOp>) -> Result<()> {
        (**self).transact_write(ops).await
    }
}
