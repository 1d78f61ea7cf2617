//! Repositories over the single-table layout
//!
//! Every operation is owner-scoped: it takes the id of the user whose
//! partition holds the checklist. Shared access resolves that owner first
//! and then calls the same methods.

mod checklists;
mod collaborators;
mod intro;
mod users;

pub use checklists::{ChecklistRepository, ChecklistUpdate, ItemUpdate, NewChecklist, NewItem};
pub use collaborators::CollaboratorRepository;
pub use users::UserRepository;

use listo_core::{Error, Result};

pub(crate) fn decode_id<T>(parsed: Result<T>) -> Result<T> {
    parsed.map_err(|e| Error::storage("item-store", "decode", e.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{MemoryStore, SharedStore};
    use listo_core::UserId;
    use std::sync::Arc;

    pub fn store() -> (MemoryStore, SharedStore) {
        let memory = MemoryStore::new();
        let shared: SharedStore = Arc::new(memory.clone());
        (memory, shared)
    }

    pub fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }
}
