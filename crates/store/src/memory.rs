//! In-process item store

use crate::item::{Attributes, Item, Key};
use crate::schema::Table;
use crate::traits::{Condition, ItemStore, WriteOp, MAX_TRANSACTION_ITEMS};
use async_trait::async_trait;
use listo_core::{Error, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

type StoreKey = (Table, String, String);

/// Ordered in-memory tables behind one lock
///
/// A transaction holds the write lock while it checks every condition and
/// applies every write, so readers never observe a partial batch.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<BTreeMap<StoreKey, Attributes>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items held in `table`
    pub fn count(&self, table: Table) -> usize {
        self.tables
            .read()
            .keys()
            .filter(|(t, _, _)| *t == table)
            .count()
    }
}

fn store_key(table: Table, key: &Key) -> StoreKey {
    (table, key.partition.clone(), key.sort.clone())
}

fn check(tables: &BTreeMap<StoreKey, Attributes>, op: &WriteOp) -> Result<()> {
    let exists = tables.contains_key(&store_key(op.table(), op.key()));
    let holds = match op.condition() {
        Condition::None => true,
        Condition::Exists => exists,
        Condition::NotExists => !exists,
    };
    if holds {
        Ok(())
    } else {
        Err(Error::condition_failed(format!("{}:{}", op.table(), op.key())))
    }
}

fn apply(tables: &mut BTreeMap<StoreKey, Attributes>, op: WriteOp) {
    match op {
        WriteOp::Put { table, item, .. } => {
            tables.insert(store_key(table, &item.key), item.attributes);
        }
        WriteOp::Update { table, key, set, .. } => {
            tables.entry(store_key(table, &key)).or_default().extend(set);
        }
        WriteOp::Delete { table, key, .. } => {
            tables.remove(&store_key(table, &key));
        }
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn get(&self, table: Table, key: &Key) -> Result<Option<Item>> {
        Ok(self
            .tables
            .read()
            .get(&store_key(table, key))
            .map(|attributes| Item {
                key: key.clone(),
                attributes: attributes.clone(),
            }))
    }

    async fn query(&self, table: Table, partition: &str, sort_prefix: &str) -> Result<Vec<Item>> {
        let start = (table, partition.to_string(), sort_prefix.to_string());
        Ok(self
            .tables
            .read()
            .range(start..)
            .take_while(|((t, p, s), _)| {
                *t == table && p == partition && s.starts_with(sort_prefix)
            })
            .map(|((_, p, s), attributes)| Item {
                key: Key::new(p.clone(), s.clone()),
                attributes: attributes.clone(),
            })
            .collect())
    }

    async fn write(&self, op: WriteOp) -> Result<()> {
        let mut tables = self.tables.write();
        check(&tables, &op)?;
        apply(&mut tables, op);
        Ok(())
    }

    async fn transact_write(&self, ops: Vec<WriteOp>) -> Result<()> {
        if ops.len() > MAX_TRANSACTION_ITEMS {
            return Err(Error::validation(
                "transaction",
                format!(
                    "{} writes exceed the limit of {MAX_TRANSACTION_ITEMS}",
                    ops.len()
                ),
            ));
        }
        let mut seen = HashSet::with_capacity(ops.len());
        for op in &ops {
            if !seen.insert(store_key(op.table(), op.key())) {
                return Err(Error::validation(
                    "transaction",
                    format!("{} is written more than once", op.key()),
                ));
            }
        }

        let mut tables = self.tables.write();
        for op in &ops {
            check(&tables, op)?;
        }
        for op in ops {
            apply(&mut tables, op);
        }
        Ok(())
    }
}
