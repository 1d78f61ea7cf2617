//! Core domain types for the `listo` API.
//!
//! - **`newtypes`**: validated identifiers that are safe to embed in
//!   composite storage keys
//! - **`models`**: checklists, items, users and collaborators as returned to
//!   clients

pub mod models;
pub mod newtypes;

pub use models::*;
pub use newtypes::*;
