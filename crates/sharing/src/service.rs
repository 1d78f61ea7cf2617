//! Issuing and redeeming share codes

use crate::code::ShareCode;
use crate::short_code::ShortCodeCache;
use crate::token::TokenCodec;
use chrono::Utc;
use listo_core::{ChecklistId, Error, Result, UserId};
use tracing::{debug, info, warn};

/// What a successfully redeemed share code grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub owner_id: UserId,
    pub checklist_id: ChecklistId,
}

#[derive(Clone)]
pub struct SharingService {
    codec: TokenCodec,
    codes: ShortCodeCache,
}

impl SharingService {
    /// Compose the codec and code cache
    ///
    /// The cache must keep a code at least as long as its token is valid.
    pub fn new(codec: TokenCodec, codes: ShortCodeCache) -> Result<Self> {
        if codes.retention() < codec.validity() {
            return Err(Error::configuration(format!(
                "share code retention ({:?}) is shorter than token validity ({:?})",
                codes.retention(),
                codec.validity()
            )));
        }
        Ok(Self { codec, codes })
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Sign a token for the checklist and publish it under a fresh code
    pub async fn issue(&self, checklist_id: &ChecklistId, owner_id: &UserId) -> Result<ShareCode> {
        let token = self.codec.sign(checklist_id, owner_id)?;
        let code = ShareCode::generate(checklist_id, owner_id, Utc::now());
        self.codes.put(&code, token).await?;

        info!(checklist_id = %checklist_id, "Issued share code");
        Ok(code)
    }

    /// Resolve a presented code into the grant it carries
    ///
    /// The owner redeeming their own code is refused before anything is
    /// written.
    pub async fn redeem(&self, raw_code: &str, requester: &UserId) -> Result<Redemption> {
        let code = ShareCode::parse(raw_code)?;
        let token = self.codes.get(&code).await.inspect_err(|e| {
            debug!(error = %e, "Share code lookup failed");
        })?;

        let claims = self.codec.verify(&token).inspect_err(|e| {
            warn!(error = %e, "Rejected share token");
        })?;

        if claims.owner_id == *requester {
            warn!(checklist_id = %claims.checklist_id, "Owner tried to join their own checklist");
            return Err(Error::SelfShare);
        }

        Ok(Redemption {
            owner_id: claims.owner_id,
            checklist_id: claims.checklist_id,
        })
    }
}
