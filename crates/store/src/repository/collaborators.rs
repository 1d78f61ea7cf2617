//! Collaborator relations and their owner-side index

use super::decode_id;
use crate::item::Item;
use crate::schema::{self, attr, Table};
use crate::traits::{Condition, SharedStore, WriteOp};
use listo_core::{ChecklistId, CollaboratorRelation, Result, UserId};
use tracing::debug;

/// Stores each relation twice in one transaction: under the collaborator,
/// to resolve owners and list shared checklists, and under the owner, to
/// list a checklist's collaborators.
#[derive(Clone)]
pub struct CollaboratorRepository {
    store: SharedStore,
}

impl CollaboratorRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record the relation; writing an existing relation again is a no-op
    pub async fn put_relation(&self, relation: &CollaboratorRelation) -> Result<()> {
        let forward = Item::new(schema::relation_key(
            &relation.collaborator_id,
            &relation.checklist_id,
        ))
        .with(attr::OWNER_ID, relation.owner_id.as_str());
        let reverse = Item::new(schema::reverse_relation_key(
            &relation.owner_id,
            &relation.checklist_id,
            &relation.collaborator_id,
        ))
        .with(attr::COLLABORATOR_ID, relation.collaborator_id.as_str());

        self.store
            .transact_write(vec![
                WriteOp::Put {
                    table: Table::ChecklistCollaborators,
                    item: forward,
                    condition: Condition::None,
                },
                WriteOp::Put {
                    table: Table::ChecklistCollaborators,
                    item: reverse,
                    condition: Condition::None,
                },
            ])
            .await?;
        debug!(
            checklist_id = %relation.checklist_id,
            collaborator_id = %relation.collaborator_id,
            "Stored collaborator relation"
        );
        Ok(())
    }

    /// Owner of `checklist` as seen by `collaborator`, if a relation exists
    pub async fn owner_of(
        &self,
        collaborator: &UserId,
        checklist: &ChecklistId,
    ) -> Result<Option<UserId>> {
        let key = schema::relation_key(collaborator, checklist);
        match self.store.get(Table::ChecklistCollaborators, &key).await? {
            Some(item) => Ok(Some(decode_id(UserId::new(item.string(attr::OWNER_ID)?))?)),
            None => Ok(None),
        }
    }

    /// Delete the relation; returns whether one existed
    pub async fn delete_relation(
        &self,
        collaborator: &UserId,
        checklist: &ChecklistId,
    ) -> Result<bool> {
        let Some(owner) = self.owner_of(collaborator, checklist).await? else {
            return Ok(false);
        };
        self.store
            .transact_write(Self::delete_ops(&owner, checklist, collaborator))
            .await?;
        debug!(
            checklist_id = %checklist,
            collaborator_id = %collaborator,
            "Removed collaborator relation"
        );
        Ok(true)
    }

    /// Every relation in which `collaborator` is the collaborator
    pub async fn checklists_for(&self, collaborator: &UserId) -> Result<Vec<CollaboratorRelation>> {
        let items = self
            .store
            .query(
                Table::ChecklistCollaborators,
                &schema::user_partition(collaborator),
                schema::checklists_prefix(),
            )
            .await?;

        items
            .iter()
            .map(|item| {
                Ok(CollaboratorRelation {
                    owner_id: decode_id(UserId::new(item.string(attr::OWNER_ID)?))?,
                    checklist_id: decode_id(ChecklistId::new(schema::trailing_id(
                        &item.key.sort,
                    )))?,
                    collaborator_id: collaborator.clone(),
                })
            })
            .collect()
    }

    /// Collaborators of the owner's checklist, in id order
    pub async fn collaborators_of(
        &self,
        owner: &UserId,
        checklist: &ChecklistId,
    ) -> Result<Vec<UserId>> {
        let items = self
            .store
            .query(
                Table::ChecklistCollaborators,
                &schema::owner_partition(owner),
                &schema::reverse_relations_prefix(checklist),
            )
            .await?;

        items
            .iter()
            .map(|item| decode_id(UserId::new(item.string(attr::COLLABORATOR_ID)?)))
            .collect()
    }

    /// Remove every relation referencing the checklist, returning the count
    pub async fn delete_all_for_checklist(
        &self,
        owner: &UserId,
        checklist: &ChecklistId,
    ) -> Result<usize> {
        let collaborators = self.collaborators_of(owner, checklist).await?;
        for collaborator in &collaborators {
            self.store
                .transact_write(Self::delete_ops(owner, checklist, collaborator))
                .await?;
        }
        Ok(collaborators.len())
    }

    fn delete_ops(owner: &UserId, checklist: &ChecklistId, collaborator: &UserId) -> Vec<WriteOp> {
        vec![
            WriteOp::Delete {
                table: Table::ChecklistCollaborators,
                key: schema::relation_key(collaborator, checklist),
                condition: Condition::None,
            },
            WriteOp::Delete {
                table: Table::ChecklistCollaborators,
                key: schema::reverse_relation_key(owner, checklist, collaborator),
                condition: Condition::None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{store, user};
    use super::*;

    fn relation(owner: &str, checklist: &str, collaborator: &str) -> CollaboratorRelation {
        CollaboratorRelation {
            owner_id: user(owner),
            checklist_id: ChecklistId::new(checklist).unwrap(),
            collaborator_id: user(collaborator),
        }
    }

    #[tokio::test]
    async fn test_relation_is_visible_from_both_sides() -> Result<()> {
        let (_, shared) = store();
        let repo = CollaboratorRepository::new(shared);
        let rel = relation("u1", "c1", "u2");

        repo.put_relation(&rel).await?;

        assert_eq!(
            repo.owner_of(&rel.collaborator_id, &rel.checklist_id).await?,
            Some(user("u1"))
        );
        assert_eq!(
            repo.collaborators_of(&rel.owner_id, &rel.checklist_id).await?,
            vec![user("u2")]
        );
        assert_eq!(repo.checklists_for(&user("u2")).await?, vec![rel]);
        Ok(())
    }

    #[tokio::test]
    async fn test_put_is_idempotent() -> Result<()> {
        let (memory, shared) = store();
        let repo = CollaboratorRepository::new(shared);
        let rel = relation("u1", "c1", "u2");

        repo.put_relation(&rel).await?;
        repo.put_relation(&rel).await?;

        assert_eq!(memory.count(Table::ChecklistCollaborators), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_removes_both_halves() -> Result<()> {
        let (memory, shared) = store();
        let repo = CollaboratorRepository::new(shared);
        let rel = relation("u1", "c1", "u2");
        repo.put_relation(&rel).await?;

        assert!(repo.delete_relation(&rel.collaborator_id, &rel.checklist_id).await?);
        assert!(!repo.delete_relation(&rel.collaborator_id, &rel.checklist_id).await?);
        assert_eq!(memory.count(Table::ChecklistCollaborators), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_all_for_checklist_leaves_other_checklists() -> Result<()> {
        let (_, shared) = store();
        let repo = CollaboratorRepository::new(shared);
        repo.put_relation(&relation("u1", "c1", "u2")).await?;
        repo.put_relation(&relation("u1", "c1", "u3")).await?;
        repo.put_relation(&relation("u1", "c10", "u2")).await?;

        let c1 = ChecklistId::new("c1").unwrap();
        assert_eq!(repo.delete_all_for_checklist(&user("u1"), &c1).await?, 2);

        assert!(repo.owner_of(&user("u2"), &c1).await?.is_none());
        assert!(repo.owner_of(&user("u3"), &c1).await?.is_none());
        let remaining = repo.checklists_for(&user("u2")).await?;
        assert_eq!(remaining, vec![relation("u1", "c10", "u2")]);
        Ok(())
    }
}
