//! Durable storage for listo
//!
//! The item store is modelled as a generic single-table key-value store:
//! items addressed by a partition and sort key, prefix queries within a
//! partition, conditional single-item writes, and all-or-nothing
//! transactions of up to [`MAX_TRANSACTION_ITEMS`] writes.
//!
//! - [`ItemStore`]: the storage contract
//! - [`MemoryStore`]: in-process implementation
//! - [`BoundedStore`]: bounds every call with a timeout
//! - [`repository`]: checklists, items, users and collaborator relations
//!   mapped onto the tables described in [`schema`]

pub mod bounded;
pub mod item;
pub mod memory;
pub mod repository;
pub mod schema;
pub mod traits;

pub use bounded::BoundedStore;
pub use item::{AttributeValue, Attributes, Item, Key};
pub use memory::MemoryStore;
pub use repository::{
    ChecklistRepository, ChecklistUpdate, CollaboratorRepository, ItemUpdate, NewChecklist,
    NewItem, UserRepository,
};
pub use schema::Table;
pub use traits::{Condition, ItemStore, SharedStore, WriteOp, MAX_TRANSACTION_ITEMS};
