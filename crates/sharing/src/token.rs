//! Signed share tokens
//!
//! A share token is an HS256 JWT binding a checklist to its owner with an
//! absolute expiry. Verification distinguishes an expired token from a
//! forged or unreadable one so the caller can tell the user the link
//! expired.

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use listo_config::{SharingSettings, SigningSecret};
use listo_core::{ChecklistId, Error, Result, UserId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Claims carried by a share token
///
/// Every field is required; a token missing one, or carrying an id that
/// could not be a storage key, is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareClaims {
    pub checklist_id: ChecklistId,
    #[serde(rename = "user_id")]
    pub owner_id: UserId,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Issuance, seconds since the epoch
    pub iat: i64,
}

impl ShareClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Signs and verifies share tokens with the process signing secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl TokenCodec {
    pub fn new(secret: &SigningSecret, validity: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.expose()),
            decoding: DecodingKey::from_secret(secret.expose()),
            validation,
            validity,
        }
    }

    pub fn from_settings(settings: &SharingSettings) -> Self {
        Self::new(&settings.signing_secret, settings.token_validity)
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Sign a token for the checklist that expires one validity window from now
    pub fn sign(&self, checklist_id: &ChecklistId, owner_id: &UserId) -> Result<String> {
        self.sign_issued_at(checklist_id, owner_id, Utc::now())
    }

    /// Sign a token as if it had been issued at `issued_at`
    pub fn sign_issued_at(
        &self,
        checklist_id: &ChecklistId,
        owner_id: &UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<String> {
        let expires_at = ChronoDuration::from_std(self.validity)
            .ok()
            .and_then(|validity| issued_at.checked_add_signed(validity))
            .ok_or_else(|| {
                Error::configuration(format!(
                    "share token validity {:?} is out of range",
                    self.validity
                ))
            })?;
        let claims = ShareClaims {
            checklist_id: checklist_id.clone(),
            owner_id: owner_id.clone(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| Error::configuration(format!("failed to sign share token: {e}")))
    }

    /// Check the signature and expiry and recover the claims
    pub fn verify(&self, token: &str) -> Result<ShareClaims> {
        jsonwebtoken::decode::<ShareClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    Error::InvalidSignature
                }
                ErrorKind::ExpiredSignature => Error::Expired,
                _ => Error::malformed(e.to_string()),
            })
    }
}
