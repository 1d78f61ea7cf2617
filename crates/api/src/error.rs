//! Error to HTTP response mapping

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use listo_core::Error;
use serde_json::json;
use tracing::{error, warn};

/// An [`Error`] leaving a handler
///
/// Client-caused failures keep their message. Server-side failures are
/// logged in full and answered with a generic message.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            Error::Malformed { .. }
            | Error::InvalidSignature
            | Error::SelfShare
            | Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Error::NotACollaborator { .. } => StatusCode::FORBIDDEN,
            Error::ShareCodeInvalid { .. } | Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Locked { .. } | Error::ConditionFailed { .. } => StatusCode::CONFLICT,
            Error::Expired => StatusCode::GONE,
            Error::Timeout { .. } | Error::StorageUnavailable { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Error::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match &self.0 {
            e if e.is_client_error() => e.to_string(),
            e if e.is_transient() => "service temporarily unavailable, try again".to_string(),
            _ => "internal server error".to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self.0, status = status.as_u16(), "Request failed");
        } else if status == StatusCode::UNAUTHORIZED {
            warn!(error = %self.0, "Rejected request");
        }

        (status, Json(json!({ "message": self.public_message() }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn status(error: Error) -> StatusCode {
        ApiError(error).status_code()
    }

    #[test]
    fn test_sharing_failures_are_client_errors() {
        assert_eq!(status(Error::SelfShare), StatusCode::BAD_REQUEST);
        assert_eq!(status(Error::malformed("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status(Error::InvalidSignature), StatusCode::BAD_REQUEST);
        assert_eq!(status(Error::Expired), StatusCode::GONE);
        assert_eq!(status(Error::share_code_invalid("x")), StatusCode::NOT_FOUND);
        assert_eq!(status(Error::not_a_collaborator("c1")), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_ambient_failures() {
        assert_eq!(status(Error::locked("c1")), StatusCode::CONFLICT);
        assert_eq!(status(Error::unauthorized("no header")), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status(Error::timeout("store.get", Duration::from_secs(5))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(Error::configuration("bad")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_hide_details() {
        let error = ApiError(Error::storage("item-store", "query", "10.0.0.7:8000 refused"));
        assert!(!error.public_message().contains("10.0.0.7"));

        let error = ApiError(Error::Expired);
        assert_eq!(error.public_message(), "share link has expired");
    }
}
