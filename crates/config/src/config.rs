//! Centralized configuration for the listo API
//!
//! The `Config` struct is the single source of truth for process settings.
//! It is immutable after construction and safe to share across request
//! handlers.

use listo_core::{Error, Result};
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use zeroize::Zeroizing;

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerSettings,

    /// Share token and share code settings
    pub sharing: SharingSettings,

    /// Identity provider settings; required to serve authenticated routes
    pub identity: Option<IdentitySettings>,

    /// Bounds on external store and cache calls
    pub timeouts: TimeoutSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Address the API binds to
    pub bind_addr: SocketAddr,

    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

/// Settings for the sharing subsystem
#[derive(Debug, Clone)]
pub struct SharingSettings {
    /// Symmetric key used to sign and verify share tokens
    pub signing_secret: SigningSecret,

    /// How long an issued share token stays valid
    pub token_validity: Duration,

    /// How long a share code stays resolvable in the cache
    pub code_retention: Duration,
}

/// Identity provider (Auth0-style) settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySettings {
    /// Tenant domain, e.g. `listo.eu.auth0.com`
    pub domain: String,

    /// Expected `aud` claim of access tokens
    pub audience: String,
}

/// Bounds applied to every external call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutSettings {
    pub store: Duration,
    pub cache: Duration,
}

/// The process-wide share token signing key
///
/// Zeroed on drop. `Debug` never prints the key material.
#[derive(Clone)]
pub struct SigningSecret(Zeroizing<Vec<u8>>);

impl SigningSecret {
    /// Wrap raw key material; an empty key is a configuration error
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::configuration("signing secret must not be empty"));
        }
        Ok(Self(Zeroizing::new(bytes)))
    }

    /// Borrow the key material for signing
    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningSecret(<{} bytes redacted>)", self.0.len())
    }
}

impl IdentitySettings {
    /// JSON Web Key Set published by the identity provider
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }

    /// Expected `iss` claim of access tokens
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }
}

impl Config {
    /// Identity settings, or a configuration error when they are absent
    pub fn require_identity(&self) -> Result<&IdentitySettings> {
        self.identity.as_ref().ok_or_else(|| {
            Error::configuration("AUTH0_DOMAIN and AUTH0_AUDIENCE must be set to serve the API")
        })
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.sharing.token_validity.is_zero() {
            return Err(Error::configuration("share token validity must be positive"));
        }
        if self.sharing.token_validity > listo_core::MAX_SHARE_TOKEN_VALIDITY {
            return Err(Error::configuration(format!(
                "share token validity ({:?}) exceeds the maximum of {:?}",
                self.sharing.token_validity,
                listo_core::MAX_SHARE_TOKEN_VALIDITY
            )));
        }
        if self.sharing.code_retention < self.sharing.token_validity {
            return Err(Error::configuration(format!(
                "share code retention ({:?}) must be at least the share token validity ({:?})",
                self.sharing.code_retention, self.sharing.token_validity
            )));
        }
        if self.timeouts.store.is_zero() || self.timeouts.cache.is_zero() {
            return Err(Error::configuration("store and cache timeouts must be positive"));
        }
        Ok(())
    }
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            store: listo_core::DEFAULT_STORE_TIMEOUT,
            cache: listo_core::DEFAULT_CACHE_TIMEOUT,
        }
    }
}
