//! Caller identity
//!
//! Every route except the health check requires a bearer access token
//! issued by the identity provider. The verified subject becomes the
//! request's [`Identity`].

use crate::error::ApiError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use listo_config::IdentitySettings;
use listo_core::{resilience::with_timeout, Error, Result, UserId};
use parking_lot::RwLock;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The verified caller of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub UserId);

/// Turns a bearer token into the caller's user id
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, bearer: &str) -> Result<UserId>;
}

#[derive(Debug, Deserialize)]
struct AccessClaims {
    sub: String,
}

/// Verifies RS256 access tokens against the provider's published keys
///
/// The key set is fetched on first use and fetched again when a token
/// names a key id it does not contain.
pub struct JwksVerifier {
    client: reqwest::Client,
    jwks_url: String,
    validation: Validation,
    timeout: Duration,
    keys: RwLock<Option<Arc<JwkSet>>>,
}

impl JwksVerifier {
    pub fn new(settings: &IdentitySettings, timeout: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[settings.audience.as_str()]);
        validation.set_issuer(&[settings.issuer()]);

        Self {
            client: reqwest::Client::new(),
            jwks_url: settings.jwks_url(),
            validation,
            timeout,
            keys: RwLock::new(None),
        }
    }

    async fn fetch_keys(&self) -> Result<Arc<JwkSet>> {
        let fetch = async {
            let response = self
                .client
                .get(&self.jwks_url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|e| Error::storage_with_source("identity-provider", "fetch_jwks", e))?;
            response
                .json::<JwkSet>()
                .await
                .map_err(|e| Error::storage_with_source("identity-provider", "fetch_jwks", e))
        };
        let keys = Arc::new(with_timeout("identity.fetch_jwks", self.timeout, fetch).await?);

        info!(keys = keys.keys.len(), "Fetched identity provider signing keys");
        *self.keys.write() = Some(Arc::clone(&keys));
        Ok(keys)
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey> {
        let cached = self.keys.read().clone();
        let keys = match cached {
            Some(keys) if keys.find(kid).is_some() => keys,
            _ => self.fetch_keys().await?,
        };

        let jwk = keys
            .find(kid)
            .ok_or_else(|| Error::unauthorized("access token signed with an unknown key"))?;
        DecodingKey::from_jwk(jwk)
            .map_err(|e| Error::unauthorized(format!("unusable signing key: {e}")))
    }
}

#[async_trait]
impl IdentityVerifier for JwksVerifier {
    async fn verify(&self, bearer: &str) -> Result<UserId> {
        let header = decode_header(bearer)
            .map_err(|e| Error::unauthorized(format!("unreadable access token: {e}")))?;
        if header.alg != Algorithm::RS256 {
            return Err(Error::unauthorized(format!(
                "unexpected signing algorithm {:?}",
                header.alg
            )));
        }
        let kid = header
            .kid
            .ok_or_else(|| Error::unauthorized("access token has no key id"))?;

        let key = self.key_for(&kid).await?;
        let data = decode::<AccessClaims>(bearer, &key, &self.validation)
            .map_err(|e| Error::unauthorized(format!("access token rejected: {e}")))?;

        UserId::new(data.claims.sub)
            .map_err(|e| Error::unauthorized(format!("access token subject unusable: {e}")))
    }
}

/// Middleware that rejects requests without a verifiable bearer token
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> std::result::Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("Authorization header is required"))?;
    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::unauthorized("Authorization header must carry a bearer token"))?;

    let user = state.verifier.verify(token).await?;
    debug!(user_id = %user, "Authenticated request");
    request.extensions_mut().insert(Identity(user));
    Ok(next.run(request).await)
}
