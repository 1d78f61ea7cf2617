//! Error types and classification for listo operations

mod builders;
mod classification;
mod types;

pub use types::{Error, Result};
