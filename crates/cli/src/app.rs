//! Assembly of the running service from its configuration

use crate::commands::ConfigArgs;
use axum::Router;
use listo_api::{cors_layer, router, AppState, JwksVerifier};
use listo_cache::{BoundedCache, MemoryCache};
use listo_config::{Config, ConfigLoader};
use listo_core::Result;
use listo_sharing::{SharingService, ShortCodeCache, TokenCodec};
use listo_store::{BoundedStore, MemoryStore, SharedStore};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// How often the share-code cache drops expired entries
pub const CACHE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub fn load_config(args: &ConfigArgs, bind: Option<SocketAddr>) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.env_file {
        loader = loader.env_file(path.clone());
    }
    if let Some(addr) = bind {
        loader = loader.bind_addr(addr);
    }
    loader.load()
}

/// Build the handler state backed by the in-process store and cache
///
/// Requires identity settings. Must run inside a tokio runtime because the
/// cache sweeper is spawned here.
pub fn build_state(config: &Config) -> Result<AppState> {
    let identity = config.require_identity()?;

    let store: SharedStore = Arc::new(BoundedStore::new(MemoryStore::new(), config.timeouts.store));
    let cache = BoundedCache::new(
        MemoryCache::with_cleanup(CACHE_SWEEP_INTERVAL),
        config.timeouts.cache,
    );

    let codes = ShortCodeCache::new(Arc::new(cache), config.sharing.code_retention);
    let sharing = SharingService::new(TokenCodec::from_settings(&config.sharing), codes)?;
    let verifier = JwksVerifier::new(identity, config.timeouts.store);

    info!(
        token_validity = ?config.sharing.token_validity,
        code_retention = ?config.sharing.code_retention,
        "sharing service ready"
    );
    Ok(AppState::new(store, sharing, Arc::new(verifier)))
}

pub fn build_router(config: &Config) -> Result<Router> {
    let state = build_state(config)?;
    Ok(router(state, cors_layer(&config.server.cors_origins)?))
}
