//! Checklist domain models as exchanged with clients

use super::newtypes::{ChecklistId, ItemId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A collection of checklist items owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    pub locked: bool,
    /// Everyone with access, owner last. Only public profile fields are exposed.
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single entry in a checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ItemId,
    pub content: String,
    pub checked: bool,
    pub ordering: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user of the application. Most profile data lives with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub picture: String,
}

/// Public view of somebody with access to a checklist. Carries no user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub email: String,
    pub picture: String,
}

impl From<&User> for Collaborator {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            picture: user.picture.clone(),
        }
    }
}

/// Durable grant of access to another user's checklist
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollaboratorRelation {
    pub owner_id: UserId,
    pub checklist_id: ChecklistId,
    pub collaborator_id: UserId,
}
