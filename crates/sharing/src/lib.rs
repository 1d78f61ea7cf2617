//! Checklist sharing for listo
//!
//! An owner asks for a share code; the code addresses a signed, expiring
//! token held in the ephemeral cache. Another user redeems the code and
//! becomes a collaborator. From then on every shared operation resolves the
//! owner through the collaborator relation and runs as the owner-scoped
//! operation.
//!
//! The token is the authorization proof. The code only locates it.

pub mod access;
pub mod code;
pub mod service;
pub mod short_code;
pub mod token;

pub use access::CollaboratorAccess;
pub use code::ShareCode;
pub use service::{Redemption, SharingService};
pub use short_code::ShortCodeCache;
pub use token::{ShareClaims, TokenCodec};
