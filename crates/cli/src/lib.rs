//! The `listo` server binary
//!
//! Wires configuration, the in-process store and cache, the sharing
//! subsystem and the identity verifier into the HTTP router.

pub mod app;
pub mod commands;
mod execute;
pub mod telemetry;

pub use commands::{Cli, Commands};
