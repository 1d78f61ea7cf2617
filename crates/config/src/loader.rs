//! Configuration loader for listo
//!
//! Reads settings from the process environment, optionally after loading a
//! `.env` file, applies explicit overrides, and validates the result.
//! A missing signing secret fails here, at startup, never per request.

use crate::config::{
    Config, IdentitySettings, ServerSettings, SharingSettings, SigningSecret, TimeoutSettings,
};
use listo_core::{
    constants::{
        AUTH0_AUDIENCE_VAR, AUTH0_DOMAIN_VAR, BIND_ADDR_VAR, CACHE_TIMEOUT_VAR,
        CORS_ORIGINS_VAR, DEFAULT_BIND_ADDR, JWT_SECRET_VAR, SHARE_CODE_RETENTION,
        SHARE_CODE_TTL_VAR, SHARE_TOKEN_TTL_VAR, SHARE_TOKEN_VALIDITY, STORE_TIMEOUT_VAR,
    },
    Error, Result,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// HS256 keys shorter than the hash output weaken the signature
const RECOMMENDED_SECRET_LENGTH: usize = 32;

/// Configuration loader that handles all startup configuration
pub struct ConfigLoader {
    /// Explicit `.env` file; its absence is an error
    env_file: Option<PathBuf>,
    /// Whether to look for `.env` in the working directory
    load_dotenv: bool,
    /// Whether to read the process environment at all
    use_process_env: bool,
    /// Values that win over the environment
    overrides: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            env_file: None,
            load_dotenv: true,
            use_process_env: true,
            overrides: HashMap::new(),
        }
    }

    /// Load variables from this file before reading the environment
    pub fn env_file(mut self, path: PathBuf) -> Self {
        self.env_file = Some(path);
        self
    }

    /// Set whether to load a `.env` file from the working directory
    pub fn load_dotenv(mut self, load: bool) -> Self {
        self.load_dotenv = load;
        self
    }

    /// Ignore the process environment and use overrides only
    pub fn isolated(mut self) -> Self {
        self.use_process_env = false;
        self.load_dotenv = false;
        self
    }

    /// Set a single variable, taking precedence over the environment
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Override the bind address
    pub fn bind_addr(self, addr: SocketAddr) -> Self {
        self.var(BIND_ADDR_VAR, addr.to_string())
    }

    /// Load the configuration
    pub fn load(self) -> Result<Config> {
        if let Some(ref path) = self.env_file {
            dotenv::from_path(path).map_err(|e| {
                Error::configuration(format!("failed to load env file '{}': {e}", path.display()))
            })?;
            debug!("Loaded environment from {}", path.display());
        } else if self.load_dotenv && dotenv::dotenv().is_ok() {
            debug!("Loaded environment from .env");
        }

        let mut vars: HashMap<String, String> = if self.use_process_env {
            std::env::vars().collect()
        } else {
            HashMap::new()
        };
        vars.extend(self.overrides);

        let config = Self::from_vars(&vars)?;
        config.validate()?;
        Ok(config)
    }

    fn from_vars(vars: &HashMap<String, String>) -> Result<Config> {
        let lookup = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let secret = lookup(JWT_SECRET_VAR).ok_or_else(|| {
            Error::configuration(format!("{JWT_SECRET_VAR} must be set to sign share tokens"))
        })?;
        if secret.len() < RECOMMENDED_SECRET_LENGTH {
            warn!(
                "{} is shorter than {} bytes; share tokens are weakly protected",
                JWT_SECRET_VAR, RECOMMENDED_SECRET_LENGTH
            );
        }
        let signing_secret = SigningSecret::from_bytes(secret.into_bytes())?;

        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|e| {
            Error::configuration(format!(
                "{BIND_ADDR_VAR} '{bind_raw}' is not a socket address: {e}"
            ))
        })?;

        let cors_origins = lookup(CORS_ORIGINS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let identity = match (lookup(AUTH0_DOMAIN_VAR), lookup(AUTH0_AUDIENCE_VAR)) {
            (Some(domain), Some(audience)) => Some(IdentitySettings { domain, audience }),
            (None, None) => None,
            _ => {
                return Err(Error::configuration(format!(
                    "{AUTH0_DOMAIN_VAR} and {AUTH0_AUDIENCE_VAR} must be set together"
                )))
            }
        };

        let token_validity =
            parse_duration(&lookup, SHARE_TOKEN_TTL_VAR, Duration::from_secs)?
                .unwrap_or(SHARE_TOKEN_VALIDITY);
        let code_retention =
            parse_duration(&lookup, SHARE_CODE_TTL_VAR, Duration::from_secs)?
                .unwrap_or(SHARE_CODE_RETENTION);

        let defaults = TimeoutSettings::default();
        let timeouts = TimeoutSettings {
            store: parse_duration(&lookup, STORE_TIMEOUT_VAR, Duration::from_millis)?
                .unwrap_or(defaults.store),
            cache: parse_duration(&lookup, CACHE_TIMEOUT_VAR, Duration::from_millis)?
                .unwrap_or(defaults.cache),
        };

        Ok(Config {
            server: ServerSettings {
                bind_addr,
                cors_origins,
            },
            sharing: SharingSettings {
                signing_secret,
                token_validity,
                code_retention,
            },
            identity,
            timeouts,
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_duration(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    unit: fn(u64) -> Duration,
) -> Result<Option<Duration>> {
    lookup(name)
        .map(|raw| {
            raw.parse::<u64>().map(unit).map_err(|e| {
                Error::configuration(format!("{name} '{raw}' is not a whole number: {e}"))
            })
        })
        .transpose()
}
