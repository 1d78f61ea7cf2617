/// Constants used throughout the listo codebase
use std::time::Duration;

// Environment variable names
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const BIND_ADDR_VAR: &str = "LISTO_BIND_ADDR";
pub const SHARE_TOKEN_TTL_VAR: &str = "LISTO_SHARE_TOKEN_TTL_SECS";
pub const SHARE_CODE_TTL_VAR: &str = "LISTO_SHARE_CODE_TTL_SECS";
pub const STORE_TIMEOUT_VAR: &str = "LISTO_STORE_TIMEOUT_MS";
pub const CACHE_TIMEOUT_VAR: &str = "LISTO_CACHE_TIMEOUT_MS";
pub const CORS_ORIGINS_VAR: &str = "LISTO_CORS_ORIGINS";
pub const AUTH0_DOMAIN_VAR: &str = "AUTH0_DOMAIN";
pub const AUTH0_AUDIENCE_VAR: &str = "AUTH0_AUDIENCE";
pub const LISTO_LOG_VAR: &str = "LISTO_LOG";

// Server defaults
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:80";

// Sharing
pub const SHARE_TOKEN_VALIDITY: Duration = Duration::from_secs(12 * 60 * 60);
pub const SHARE_CODE_RETENTION: Duration = Duration::from_secs(12 * 60 * 60);
/// Longest share token validity the loader accepts
pub const MAX_SHARE_TOKEN_VALIDITY: Duration = Duration::from_secs(30 * 24 * 60 * 60);
pub const SHARE_CODE_LENGTH: usize = 11;

// External call bounds
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(5);

// Identifiers are embedded in composite storage keys joined with this separator
pub const KEY_SEPARATOR: char = '#';
pub const MAX_IDENTIFIER_LENGTH: usize = 256;
