//! Checklists and their items

use super::collaborators::CollaboratorRepository;
use super::decode_id;
use super::intro::{INTRO_ITEMS, INTRO_TITLE};
use super::users::UserRepository;
use crate::item::{Attributes, Item};
use crate::schema::{self, attr, Table, ENTITY_CHECKLIST, ENTITY_ITEM};
use crate::traits::{Condition, SharedStore, WriteOp, MAX_TRANSACTION_ITEMS};
use chrono::Utc;
use listo_core::{
    Checklist, ChecklistId, ChecklistItem, Collaborator, Error, ItemId, Result, UserId,
};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChecklist {
    pub title: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistUpdate {
    pub title: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub content: String,
    pub ordering: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub content: String,
    pub checked: bool,
    pub ordering: i64,
}

fn required_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::validation("title", "is required"));
    }
    Ok(title.to_string())
}

/// Map a failed existence precondition to the missing entity
fn missing_as_not_found<'a>(
    entity: &'static str,
    id: &'a str,
) -> impl FnOnce(Error) -> Error + 'a {
    move |e| match e {
        Error::ConditionFailed { .. } => Error::not_found(entity, id),
        other => other,
    }
}

fn decode_checklist(item: &Item) -> Result<Checklist> {
    Ok(Checklist {
        id: decode_id(ChecklistId::new(schema::trailing_id(&item.key.sort)))?,
        title: item.string(attr::TITLE)?.to_string(),
        locked: item.boolean(attr::LOCKED)?,
        collaborators: Vec::new(),
        created_at: item.timestamp(attr::CREATED_AT)?,
        updated_at: item.timestamp(attr::UPDATED_AT)?,
    })
}

fn decode_item(item: &Item) -> Result<ChecklistItem> {
    Ok(ChecklistItem {
        id: decode_id(ItemId::new(schema::trailing_id(&item.key.sort)))?,
        content: item.string(attr::CONTENT)?.to_string(),
        checked: item.boolean(attr::CHECKED)?,
        ordering: item.number(attr::ORDERING)?,
        created_at: item.timestamp(attr::CREATED_AT)?,
        updated_at: item.timestamp(attr::UPDATED_AT)?,
    })
}

fn encode_checklist(owner: &UserId, checklist: &Checklist) -> Item {
    Item::new(schema::checklist_key(owner, &checklist.id))
        .with(attr::ENTITY, ENTITY_CHECKLIST)
        .with(attr::TITLE, checklist.title.as_str())
        .with(attr::LOCKED, checklist.locked)
        .with(attr::CREATED_AT, checklist.created_at)
        .with(attr::UPDATED_AT, checklist.updated_at)
}

fn encode_item(owner: &UserId, checklist: &ChecklistId, item: &ChecklistItem) -> Item {
    Item::new(schema::item_key(owner, checklist, &item.id))
        .with(attr::ENTITY, ENTITY_ITEM)
        .with(attr::CONTENT, item.content.as_str())
        .with(attr::CHECKED, item.checked)
        .with(attr::ORDERING, item.ordering)
        .with(attr::CREATED_AT, item.created_at)
        .with(attr::UPDATED_AT, item.updated_at)
}

/// Owner-scoped access to checklists and items
#[derive(Clone)]
pub struct ChecklistRepository {
    store: SharedStore,
    collaborators: CollaboratorRepository,
    users: UserRepository,
}

impl ChecklistRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            collaborators: CollaboratorRepository::new(store.clone()),
            users: UserRepository::new(store.clone()),
            store,
        }
    }

    /// Every checklist in the owner's partition, oldest first
    pub async fn list(&self, owner: &UserId) -> Result<Vec<Checklist>> {
        let items = self
            .store
            .query(
                Table::Checklists,
                &schema::user_partition(owner),
                schema::checklists_prefix(),
            )
            .await?;

        let mut checklists = Vec::new();
        for item in items.iter().filter(|i| i.is(attr::ENTITY, ENTITY_CHECKLIST)) {
            let mut checklist = decode_checklist(item)?;
            checklist.collaborators = self.collaborators(owner, &checklist.id).await?;
            checklists.push(checklist);
        }
        checklists.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(checklists)
    }

    pub async fn get(&self, owner: &UserId, id: &ChecklistId) -> Result<Checklist> {
        let mut checklist = self.get_bare(owner, id).await?;
        checklist.collaborators = self.collaborators(owner, id).await?;
        Ok(checklist)
    }

    async fn get_bare(&self, owner: &UserId, id: &ChecklistId) -> Result<Checklist> {
        let item = self
            .store
            .get(Table::Checklists, &schema::checklist_key(owner, id))
            .await?
            .ok_or_else(|| Error::not_found("checklist", id.as_str()))?;
        decode_checklist(&item)
    }

    /// Public profiles of everyone with access, owner last
    ///
    /// Users who never stored a profile are left out.
    pub async fn collaborators(
        &self,
        owner: &UserId,
        id: &ChecklistId,
    ) -> Result<Vec<Collaborator>> {
        let mut people = self.collaborators.collaborators_of(owner, id).await?;
        people.push(owner.clone());

        let mut profiles = Vec::with_capacity(people.len());
        for person in &people {
            if let Some(user) = self.users.get(person).await? {
                profiles.push(Collaborator::from(&user));
            }
        }
        Ok(profiles)
    }

    /// Items of the checklist in display order
    pub async fn items(&self, owner: &UserId, id: &ChecklistId) -> Result<Vec<ChecklistItem>> {
        let stored = self
            .store
            .query(
                Table::Checklists,
                &schema::user_partition(owner),
                &schema::items_prefix(id),
            )
            .await?;

        let mut items = stored
            .iter()
            .filter(|i| i.is(attr::ENTITY, ENTITY_ITEM))
            .map(decode_item)
            .collect::<Result<Vec<_>>>()?;
        items.sort_by(|a, b| {
            a.ordering
                .cmp(&b.ordering)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(items)
    }

    pub async fn create(&self, owner: &UserId, new: NewChecklist) -> Result<Checklist> {
        let now = Utc::now();
        let checklist = Checklist {
            id: ChecklistId::generate(),
            title: required_title(&new.title)?,
            locked: new.locked,
            collaborators: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.store
            .put(
                Table::Checklists,
                encode_checklist(owner, &checklist),
                Condition::NotExists,
            )
            .await?;
        debug!(checklist_id = %checklist.id, "Created checklist");
        Ok(checklist)
    }

    pub async fn update(
        &self,
        owner: &UserId,
        id: &ChecklistId,
        update: ChecklistUpdate,
    ) -> Result<Checklist> {
        let mut set = Attributes::new();
        set.insert(attr::TITLE.into(), required_title(&update.title)?.into());
        set.insert(attr::LOCKED.into(), update.locked.into());
        set.insert(attr::UPDATED_AT.into(), Utc::now().into());

        self.store
            .update(
                Table::Checklists,
                schema::checklist_key(owner, id),
                set,
                Condition::Exists,
            )
            .await
            .map_err(missing_as_not_found("checklist", id.as_str()))?;
        self.get(owner, id).await
    }

    /// Delete the checklist together with its items and collaborator
    /// relations. Locked checklists are refused.
    pub async fn delete(&self, owner: &UserId, id: &ChecklistId) -> Result<()> {
        let checklist = self.get_bare(owner, id).await?;
        if checklist.locked {
            return Err(Error::locked(id.as_str()));
        }

        let relations = self
            .collaborators
            .delete_all_for_checklist(owner, id)
            .await?;

        let item_keys: Vec<_> = self
            .store
            .query(
                Table::Checklists,
                &schema::user_partition(owner),
                &schema::items_prefix(id),
            )
            .await?
            .into_iter()
            .map(|item| item.key)
            .collect();
        for chunk in item_keys.chunks(MAX_TRANSACTION_ITEMS) {
            let ops = chunk
                .iter()
                .map(|key| WriteOp::Delete {
                    table: Table::Checklists,
                    key: key.clone(),
                    condition: Condition::None,
                })
                .collect();
            self.store.transact_write(ops).await?;
        }

        self.store
            .delete(
                Table::Checklists,
                schema::checklist_key(owner, id),
                Condition::Exists,
            )
            .await
            .map_err(missing_as_not_found("checklist", id.as_str()))?;
        info!(
            checklist_id = %id,
            items = item_keys.len(),
            relations,
            "Deleted checklist"
        );
        Ok(())
    }

    pub async fn create_item(
        &self,
        owner: &UserId,
        checklist: &ChecklistId,
        new: NewItem,
    ) -> Result<ChecklistItem> {
        self.get_bare(owner, checklist).await?;

        let now = Utc::now();
        let item = ChecklistItem {
            id: ItemId::generate(),
            content: new.content,
            checked: false,
            ordering: new.ordering,
            created_at: now,
            updated_at: now,
        };
        self.store
            .put(
                Table::Checklists,
                encode_item(owner, checklist, &item),
                Condition::NotExists,
            )
            .await?;
        Ok(item)
    }

    pub async fn update_item(
        &self,
        owner: &UserId,
        checklist: &ChecklistId,
        id: &ItemId,
        update: ItemUpdate,
    ) -> Result<ChecklistItem> {
        let key = schema::item_key(owner, checklist, id);
        let mut set = Attributes::new();
        set.insert(attr::CONTENT.into(), update.content.into());
        set.insert(attr::CHECKED.into(), update.checked.into());
        set.insert(attr::ORDERING.into(), update.ordering.into());
        set.insert(attr::UPDATED_AT.into(), Utc::now().into());

        self.store
            .update(Table::Checklists, key.clone(), set, Condition::Exists)
            .await
            .map_err(missing_as_not_found("item", id.as_str()))?;

        let stored = self
            .store
            .get(Table::Checklists, &key)
            .await?
            .ok_or_else(|| Error::not_found("item", id.as_str()))?;
        decode_item(&stored)
    }

    /// Delete one item; deleting an absent item succeeds
    pub async fn delete_item(
        &self,
        owner: &UserId,
        checklist: &ChecklistId,
        id: &ItemId,
    ) -> Result<()> {
        self.store
            .delete(
                Table::Checklists,
                schema::item_key(owner, checklist, id),
                Condition::None,
            )
            .await
    }

    /// Set every item's checked state in one transaction
    ///
    /// Either all items change or none do. Returns the number of items.
    pub async fn set_all_checked(
        &self,
        owner: &UserId,
        checklist: &ChecklistId,
        checked: bool,
    ) -> Result<usize> {
        self.get_bare(owner, checklist).await?;
        let items = self.items(owner, checklist).await?;
        if items.is_empty() {
            return Ok(0);
        }
        if items.len() > MAX_TRANSACTION_ITEMS {
            return Err(Error::validation(
                "items",
                format!("cannot update more than {MAX_TRANSACTION_ITEMS} items at once"),
            ));
        }

        let now = Utc::now();
        let ops = items
            .iter()
            .map(|item| {
                let mut set = Attributes::new();
                set.insert(attr::CHECKED.into(), checked.into());
                set.insert(attr::UPDATED_AT.into(), now.into());
                WriteOp::Update {
                    table: Table::Checklists,
                    key: schema::item_key(owner, checklist, &item.id),
                    set,
                    condition: Condition::Exists,
                }
            })
            .collect();
        self.store.transact_write(ops).await?;
        Ok(items.len())
    }

    /// Create the tutorial checklist a new user starts with
    ///
    /// Safe to repeat: when the owner already has it, the existing
    /// checklist is returned and nothing is written.
    pub async fn create_introductory(&self, owner: &UserId) -> Result<Checklist> {
        let now = Utc::now();
        let checklist = Checklist {
            id: ChecklistId::introductory(owner),
            title: INTRO_TITLE.to_string(),
            locked: false,
            collaborators: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let mut ops = vec![WriteOp::Put {
            table: Table::Checklists,
            item: encode_checklist(owner, &checklist),
            condition: Condition::NotExists,
        }];
        for (ordering, content) in (0_i64..).zip(INTRO_ITEMS) {
            let item = ChecklistItem {
                id: ItemId::generate(),
                content: content.to_string(),
                checked: false,
                ordering,
                created_at: now,
                updated_at: now,
            };
            ops.push(WriteOp::Put {
                table: Table::Checklists,
                item: encode_item(owner, &checklist.id, &item),
                condition: Condition::NotExists,
            });
        }
        match self.store.transact_write(ops).await {
            Ok(()) => {
                debug!(checklist_id = %checklist.id, "Created introductory checklist");
                Ok(checklist)
            }
            Err(Error::ConditionFailed { .. }) => self.get(owner, &checklist.id).await,
            Err(e) => Err(e),
        }
    }
}
