//! Builder methods for creating errors with context

use super::types::Error;
use std::time::Duration;

impl Error {
    /// Create a malformed-token error
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::Malformed {
            message: message.into(),
        }
    }

    /// Create a share-code lookup miss
    #[must_use]
    pub fn share_code_invalid(code: impl Into<String>) -> Self {
        Error::ShareCodeInvalid { code: code.into() }
    }

    /// Create a missing-collaborator-relation error
    #[must_use]
    pub fn not_a_collaborator(checklist_id: impl Into<String>) -> Self {
        Error::NotACollaborator {
            checklist_id: checklist_id.into(),
        }
    }

    /// Create a storage transport error
    #[must_use]
    pub fn storage(
        backend: &'static str,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::StorageUnavailable {
            backend,
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage transport error with a source error
    #[must_use]
    pub fn storage_with_source(
        backend: &'static str,
        operation: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let source = source.into();
        Error::StorageUnavailable {
            backend,
            operation: operation.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a timeout error
    #[must_use]
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a locked-checklist error
    #[must_use]
    pub fn locked(checklist_id: impl Into<String>) -> Self {
        Error::Locked {
            checklist_id: checklist_id.into(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a failed-precondition error
    #[must_use]
    pub fn condition_failed(key: impl Into<String>) -> Self {
        Error::ConditionFailed { key: key.into() }
    }

    /// Create an unauthorized error
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Error::Unauthorized {
            message: message.into(),
        }
    }
}
