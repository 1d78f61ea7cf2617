//! User profiles

use super::decode_id;
use crate::item::{Attributes, Item};
use crate::schema::{self, attr, Table};
use crate::traits::{Condition, SharedStore};
use listo_core::{Error, Result, User, UserId};
use tracing::debug;

#[derive(Clone)]
pub struct UserRepository {
    store: SharedStore,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: &UserId) -> Result<Option<User>> {
        let Some(item) = self
            .store
            .get(Table::Users, &schema::profile_key(id))
            .await?
        else {
            return Ok(None);
        };
        Ok(Some(User {
            id: decode_id(UserId::new(schema::trailing_id(&item.key.partition)))?,
            email: item.string(attr::EMAIL)?.to_string(),
            picture: item.string(attr::PICTURE)?.to_string(),
        }))
    }

    /// Create or refresh a profile; the flag is true when it was created
    pub async fn upsert(&self, user: &User) -> Result<bool> {
        let item = Item::new(schema::profile_key(&user.id))
            .with(attr::EMAIL, user.email.as_str())
            .with(attr::PICTURE, user.picture.as_str());

        match self.store.put(Table::Users, item, Condition::NotExists).await {
            Ok(()) => {
                debug!(user_id = %user.id, "Created user profile");
                Ok(true)
            }
            Err(Error::ConditionFailed { .. }) => {
                let mut set = Attributes::new();
                set.insert(attr::EMAIL.to_string(), user.email.as_str().into());
                set.insert(attr::PICTURE.to_string(), user.picture.as_str().into());
                self.store
                    .update(
                        Table::Users,
                        schema::profile_key(&user.id),
                        set,
                        Condition::Exists,
                    )
                    .await?;
                debug!(user_id = %user.id, "Updated user profile");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{store, user};
    use super::*;

    fn profile(email: &str) -> User {
        User {
            id: user("auth0|u1"),
            email: email.to_string(),
            picture: "https://cdn.example/u1.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates() -> Result<()> {
        let (_, shared) = store();
        let repo = UserRepository::new(shared);

        assert!(repo.get(&user("auth0|u1")).await?.is_none());
        assert!(repo.upsert(&profile("old@example.com")).await?);
        assert!(!repo.upsert(&profile("new@example.com")).await?);

        let stored = repo.get(&user("auth0|u1")).await?.unwrap();
        assert_eq!(stored, profile("new@example.com"));
        Ok(())
    }
}
