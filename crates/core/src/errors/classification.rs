//! Classification of errors into caller-facing families

use super::types::Error;

impl Error {
    /// Whether the caller caused this failure (the 4xx family)
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. }
                | Self::InvalidSignature
                | Self::Expired
                | Self::ShareCodeInvalid { .. }
                | Self::SelfShare
                | Self::NotACollaborator { .. }
                | Self::NotFound { .. }
                | Self::Locked { .. }
                | Self::Validation { .. }
                | Self::ConditionFailed { .. }
                | Self::Unauthorized { .. }
        )
    }

    /// Check if this error is transient and the caller may retry
    ///
    /// Nothing inside listo retries on its own; this only tells the HTTP
    /// boundary which status family to report.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::StorageUnavailable { .. })
    }
}
