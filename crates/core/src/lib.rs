//! Core domain types, errors, and constants for the `listo` API.
//!
//! Everything the other crates agree on lives here: the single `Error` enum
//! every operation reports through, the validated identifier newtypes used
//! as storage keys, and the checklist domain models returned to clients.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum, `Result` alias, and classification
//!   helpers used by the HTTP boundary to pick a status code.
//! - **`types`**: `UserId`, `ChecklistId`, `ItemId` and the `Checklist`,
//!   `ChecklistItem`, `User` and `Collaborator` models.
//! - **`constants`**: environment variable names and protocol defaults.
//! - **`resilience`**: the bounded-timeout wrapper applied to every call into
//!   the external store and cache.

pub mod constants;
pub mod errors;
pub mod resilience;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
