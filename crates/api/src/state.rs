//! Shared handler state

use crate::auth::IdentityVerifier;
use listo_sharing::{CollaboratorAccess, SharingService};
use listo_store::{ChecklistRepository, SharedStore, UserRepository};
use std::sync::Arc;

/// Everything a handler needs; cheap to clone per request
#[derive(Clone)]
pub struct AppState {
    pub checklists: ChecklistRepository,
    pub users: UserRepository,
    pub access: CollaboratorAccess,
    pub sharing: SharingService,
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    pub fn new(
        store: SharedStore,
        sharing: SharingService,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        Self {
            checklists: ChecklistRepository::new(store.clone()),
            users: UserRepository::new(store.clone()),
            access: CollaboratorAccess::new(store),
            sharing,
            verifier,
        }
    }
}
