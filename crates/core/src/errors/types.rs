//! Core error type definitions

use std::time::Duration;

/// Result type alias for listo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for listo operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A share token could not be parsed or is missing required claims
    #[error("malformed share token: {message}")]
    Malformed { message: String },

    /// A share token's signature does not match the process signing secret
    #[error("share token signature is invalid")]
    InvalidSignature,

    /// A share token was presented after its expiry
    #[error("share link has expired")]
    Expired,

    /// No token is stored under the presented share code
    #[error("share code '{code}' is invalid or has expired")]
    ShareCodeInvalid { code: String },

    /// An owner tried to redeem a share code for their own checklist
    #[error("cannot join your own checklist as a collaborator")]
    SelfShare,

    /// No collaborator relation links the requester to the checklist
    #[error("not a collaborator on checklist '{checklist_id}'")]
    NotACollaborator { checklist_id: String },

    /// Transport failure in the item store or the ephemeral cache
    #[error("{backend} unavailable during {operation}: {message}")]
    StorageUnavailable {
        backend: &'static str,
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An external call exceeded its bound
    #[error("operation '{operation}' timed out after {duration:?}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A checklist, item or user does not exist
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Locked checklists cannot be deleted
    #[error("checklist '{checklist_id}' is locked")]
    Locked { checklist_id: String },

    /// Request input failed validation
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// A conditional write or transaction precondition did not hold
    #[error("condition failed for '{key}'")]
    ConditionFailed { key: String },

    /// Missing or unverifiable caller identity
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },
}
