//! Configuration loading and management for listo
//!
//! All settings are read once at startup into an immutable [`Config`] that
//! is shared by `Arc` for the life of the process.

pub mod config;
pub mod loader;


pub use config::*;
pub use loader::ConfigLoader;
