//! Table names, key layout and attribute names
//!
//! | table                    | partition             | sort                                  |
//! |--------------------------|-----------------------|---------------------------------------|
//! | `Checklists`             | `USER#{owner}`        | `CHECKLIST#{id}`                      |
//! | `Checklists`             | `USER#{owner}`        | `CHECKLIST#{id}#ITEM#{item}`          |
//! | `Users`                  | `USER#{id}`           | `PROFILE`                             |
//! | `ChecklistCollaborators` | `USER#{collaborator}` | `CHECKLIST#{id}`                      |
//! | `ChecklistCollaborators` | `OWNER#{owner}`       | `CHECKLIST#{id}#USER#{collaborator}`  |
//!
//! Identifiers never contain `#`, so a prefix such as `CHECKLIST#c1#` can
//! not match the records of `c10`.

use crate::item::Key;
use listo_core::{ChecklistId, ItemId, UserId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Checklists,
    Users,
    ChecklistCollaborators,
}

impl Table {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checklists => "Checklists",
            Self::Users => "Users",
            Self::ChecklistCollaborators => "ChecklistCollaborators",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod attr {
    pub const ENTITY: &str = "Entity";
    pub const TITLE: &str = "Title";
    pub const LOCKED: &str = "Locked";
    pub const CONTENT: &str = "Content";
    pub const CHECKED: &str = "Checked";
    pub const ORDERING: &str = "Ordering";
    pub const EMAIL: &str = "Email";
    pub const PICTURE: &str = "Picture";
    pub const OWNER_ID: &str = "OwnerID";
    pub const COLLABORATOR_ID: &str = "CollaboratorID";
    pub const CREATED_AT: &str = "CreatedAt";
    pub const UPDATED_AT: &str = "UpdatedAt";
}

pub const ENTITY_CHECKLIST: &str = "CHECKLIST";
pub const ENTITY_ITEM: &str = "ITEM";

const USER_PREFIX: &str = "USER#";
const OWNER_PREFIX: &str = "OWNER#";
const CHECKLIST_PREFIX: &str = "CHECKLIST#";
const PROFILE_SK: &str = "PROFILE";

pub fn user_partition(user: &UserId) -> String {
    format!("{USER_PREFIX}{user}")
}

pub fn owner_partition(owner: &UserId) -> String {
    format!("{OWNER_PREFIX}{owner}")
}

/// Prefix shared by every checklist and item sort key
pub fn checklists_prefix() -> &'static str {
    CHECKLIST_PREFIX
}

pub fn checklist_key(owner: &UserId, checklist: &ChecklistId) -> Key {
    Key::new(user_partition(owner), format!("{CHECKLIST_PREFIX}{checklist}"))
}

pub fn items_prefix(checklist: &ChecklistId) -> String {
    format!("{CHECKLIST_PREFIX}{checklist}#ITEM#")
}

pub fn item_key(owner: &UserId, checklist: &ChecklistId, item: &ItemId) -> Key {
    Key::new(
        user_partition(owner),
        format!("{}{item}", items_prefix(checklist)),
    )
}

pub fn profile_key(user: &UserId) -> Key {
    Key::new(user_partition(user), PROFILE_SK)
}

/// Collaborator-perspective relation record
pub fn relation_key(collaborator: &UserId, checklist: &ChecklistId) -> Key {
    Key::new(
        user_partition(collaborator),
        format!("{CHECKLIST_PREFIX}{checklist}"),
    )
}

pub fn reverse_relations_prefix(checklist: &ChecklistId) -> String {
    format!("{CHECKLIST_PREFIX}{checklist}#USER#")
}

/// Owner-perspective relation record
pub fn reverse_relation_key(owner: &UserId, checklist: &ChecklistId, collaborator: &UserId) -> Key {
    Key::new(
        owner_partition(owner),
        format!("{}{collaborator}", reverse_relations_prefix(checklist)),
    )
}

/// Last `#`-separated segment of a sort key
pub fn trailing_id(sort: &str) -> &str {
    sort.rsplit('#').next().unwrap_or(sort)
}
