//! Ephemeral key-value cache for listo
//!
//! This crate provides the cache seam the sharing subsystem stores share
//! codes in:
//! - [`KeyValueCache`]: the TTL key-value contract (`set` / `get`)
//! - [`MemoryCache`]: an in-process implementation with lazy expiry and a
//!   background sweeper
//! - [`BoundedCache`]: a decorator that bounds every call with a timeout

pub mod bounded;
pub mod cleanup;
pub mod memory;
pub mod traits;

pub use bounded::BoundedCache;
pub use memory::MemoryCache;
pub use traits::KeyValueCache;
