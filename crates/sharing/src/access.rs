//! Collaborator access to other users' checklists

use crate::service::Redemption;
use listo_core::{Checklist, ChecklistId, CollaboratorRelation, Error, Result, UserId};
use listo_store::{ChecklistRepository, CollaboratorRepository, SharedStore};
use tracing::{debug, info};

/// Turns redemptions into collaborator relations and resolves the owner
/// behind every shared operation
#[derive(Clone)]
pub struct CollaboratorAccess {
    relations: CollaboratorRepository,
    checklists: ChecklistRepository,
}

impl CollaboratorAccess {
    pub fn new(store: SharedStore) -> Self {
        Self {
            relations: CollaboratorRepository::new(store.clone()),
            checklists: ChecklistRepository::new(store),
        }
    }

    /// Grant `collaborator` access to the owner's checklist
    ///
    /// Granting twice rewrites the same relation. The checklist must still
    /// exist.
    pub async fn add_collaborator(
        &self,
        owner_id: &UserId,
        checklist_id: &ChecklistId,
        collaborator_id: &UserId,
    ) -> Result<()> {
        if owner_id == collaborator_id {
            return Err(Error::SelfShare);
        }
        self.checklists.get(owner_id, checklist_id).await?;

        self.relations
            .put_relation(&CollaboratorRelation {
                owner_id: owner_id.clone(),
                checklist_id: checklist_id.clone(),
                collaborator_id: collaborator_id.clone(),
            })
            .await?;
        info!(checklist_id = %checklist_id, "Added collaborator");
        Ok(())
    }

    pub async fn join(&self, redemption: &Redemption, collaborator_id: &UserId) -> Result<()> {
        self.add_collaborator(
            &redemption.owner_id,
            &redemption.checklist_id,
            collaborator_id,
        )
        .await
    }

    /// Leave a shared checklist; leaving one never joined is fine
    pub async fn remove_collaborator(
        &self,
        collaborator_id: &UserId,
        checklist_id: &ChecklistId,
    ) -> Result<()> {
        let removed = self
            .relations
            .delete_relation(collaborator_id, checklist_id)
            .await?;
        debug!(checklist_id = %checklist_id, removed, "Collaborator left checklist");
        Ok(())
    }

    /// Owner whose partition holds a checklist shared with `requester`
    pub async fn resolve_owner(
        &self,
        requester: &UserId,
        checklist_id: &ChecklistId,
    ) -> Result<UserId> {
        self.relations
            .owner_of(requester, checklist_id)
            .await?
            .ok_or_else(|| Error::not_a_collaborator(checklist_id.as_str()))
    }

    /// Every checklist shared with `requester`, read through each owner
    ///
    /// Relations whose checklist has disappeared are skipped.
    pub async fn shared_checklists(&self, requester: &UserId) -> Result<Vec<Checklist>> {
        let relations = self.relations.checklists_for(requester).await?;
        let mut shared = Vec::with_capacity(relations.len());
        for relation in relations {
            match self
                .checklists
                .get(&relation.owner_id, &relation.checklist_id)
                .await
            {
                Ok(checklist) => shared.push(checklist),
                Err(Error::NotFound { .. }) => {
                    debug!(checklist_id = %relation.checklist_id, "Skipping stale relation");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listo_store::{MemoryStore, NewChecklist, Table};
    use std::sync::Arc;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    async fn setup() -> (CollaboratorAccess, ChecklistRepository, MemoryStore, Checklist) {
        let memory = MemoryStore::new();
        let store: SharedStore = Arc::new(memory.clone());
        let checklists = ChecklistRepository::new(store.clone());
        let checklist = checklists
            .create(
                &user("u1"),
                NewChecklist {
                    title: "Camping".into(),
                    locked: false,
                },
            )
            .await
            .unwrap();
        (CollaboratorAccess::new(store), checklists, memory, checklist)
    }

    #[tokio::test]
    async fn test_resolve_owner_requires_relation() -> Result<()> {
        let (access, _, _, checklist) = setup().await;

        assert!(matches!(
            access.resolve_owner(&user("u2"), &checklist.id).await,
            Err(Error::NotACollaborator { .. })
        ));

        access
            .add_collaborator(&user("u1"), &checklist.id, &user("u2"))
            .await?;
        assert_eq!(access.resolve_owner(&user("u2"), &checklist.id).await?, user("u1"));
        Ok(())
    }

    #[tokio::test]
    async fn test_add_is_idempotent_and_remove_tolerates_absence() -> Result<()> {
        let (access, _, memory, checklist) = setup().await;

        access
            .add_collaborator(&user("u1"), &checklist.id, &user("u2"))
            .await?;
        access
            .add_collaborator(&user("u1"), &checklist.id, &user("u2"))
            .await?;
        assert_eq!(memory.count(Table::ChecklistCollaborators), 2);

        access.remove_collaborator(&user("u2"), &checklist.id).await?;
        access.remove_collaborator(&user("u2"), &checklist.id).await?;
        assert_eq!(memory.count(Table::ChecklistCollaborators), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_cannot_join_missing_checklist_or_own_checklist() {
        let (access, _, memory, checklist) = setup().await;

        let missing = ChecklistId::new("gone").unwrap();
        assert!(matches!(
            access.add_collaborator(&user("u1"), &missing, &user("u2")).await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            access.add_collaborator(&user("u1"), &checklist.id, &user("u1")).await,
            Err(Error::SelfShare)
        ));
        assert_eq!(memory.count(Table::ChecklistCollaborators), 0);
    }

    #[tokio::test]
    async fn test_shared_checklists_skip_stale_relations() -> Result<()> {
        let (access, _, memory, checklist) = setup().await;
        access
            .add_collaborator(&user("u1"), &checklist.id, &user("u2"))
            .await?;

        // a relation left behind by a checklist that no longer exists
        CollaboratorRepository::new(Arc::new(memory))
            .put_relation(&CollaboratorRelation {
                owner_id: user("u3"),
                checklist_id: ChecklistId::new("deleted").unwrap(),
                collaborator_id: user("u2"),
            })
            .await?;

        let shared = access.shared_checklists(&user("u2")).await?;
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].title, "Camping");
        Ok(())
    }
}
