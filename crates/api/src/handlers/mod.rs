//! Route handlers
//!
//! Response bodies keep the shapes existing clients expect: a `message`
//! for confirmations and errors, and the entity under its own name.

pub mod checklists;
pub mod items;
pub mod shared;
pub mod sharing;
pub mod users;

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub(crate) fn message(message: &'static str) -> Json<Message> {
    Json(Message { message })
}

/// Unauthenticated liveness probe
pub async fn health() -> Json<Message> {
    message("Listo API")
}
