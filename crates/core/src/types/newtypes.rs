//! Newtype wrappers for identifiers
//!
//! Identifiers end up inside composite keys such as `USER#{id}` and
//! `CHECKLIST#{id}#ITEM#{item}`, so they may never be empty or contain the
//! key separator.

use crate::constants::{KEY_SEPARATOR, MAX_IDENTIFIER_LENGTH};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

fn validate_identifier(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    if value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(Error::validation(
            field,
            format!("must be at most {MAX_IDENTIFIER_LENGTH} bytes"),
        ));
    }
    if value.contains(KEY_SEPARATOR) || value.chars().any(char::is_control) {
        return Err(Error::validation(
            field,
            format!("must not contain '{KEY_SEPARATOR}' or control characters"),
        ));
    }
    Ok(())
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier with validation
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                validate_identifier(&value, $field)?;
                Ok(Self(value))
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert to String
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

identifier!(
    /// Identity-provider subject of a user
    UserId,
    "user_id"
);

identifier!(
    /// Identifier of a checklist, unique within its owner's partition
    ChecklistId,
    "checklist_id"
);

identifier!(
    /// Identifier of an item within a checklist
    ItemId,
    "item_id"
);

impl ChecklistId {
    /// Generate a fresh random checklist id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The fixed id of `owner`'s introductory checklist
    ///
    /// Stable per owner and distinct across owners, so creating the
    /// introductory checklist twice collides instead of duplicating it.
    pub fn introductory(owner: &UserId) -> Self {
        let name = format!("listo:introductory:{owner}");
        Self(uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, name.as_bytes()).to_string())
    }
}

impl ItemId {
    /// Generate a fresh random item id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_provider_subjects_are_accepted() {
        let id = UserId::new("auth0|64f1c2a9e4b0").unwrap();
        assert_eq!(id.as_str(), "auth0|64f1c2a9e4b0");
        assert_eq!(id.to_string(), "auth0|64f1c2a9e4b0");
    }

    #[test]
    fn test_rejects_empty_and_separator() {
        assert!(matches!(
            UserId::new(""),
            Err(Error::Validation { ref field, .. }) if field == "user_id"
        ));
        assert!(ChecklistId::new("   ").is_err());
        assert!(ChecklistId::new("abc#ITEM#x").is_err());
        assert!(ItemId::new("line\nbreak").is_err());
        assert!(ItemId::new("x".repeat(MAX_IDENTIFIER_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let id: ChecklistId = serde_json::from_str("\"c-1\"").unwrap();
        assert_eq!(id.as_str(), "c-1");
        assert!(serde_json::from_str::<ChecklistId>("\"a#b\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c-1\"");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(ChecklistId::generate(), ChecklistId::generate());
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    proptest! {
        #[test]
        fn prop_valid_ids_round_trip(raw in "[a-zA-Z0-9|_.-]{1,64}") {
            let id = UserId::new(raw.clone()).unwrap();
            prop_assert_eq!(id.into_string(), raw);
        }
    }
}
