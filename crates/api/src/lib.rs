//! HTTP API for listo
//!
//! An axum [`Router`](axum::Router) over the checklist repositories and the
//! sharing subsystem. Owner routes act on the caller's own partition;
//! `/shared` routes first resolve the checklist's owner through the
//! caller's collaborator relation and then run the owner route's logic.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use auth::{Identity, IdentityVerifier, JwksVerifier};
pub use error::{ApiError, ApiResult};
pub use routes::{cors_layer, router};
pub use state::AppState;
