//! Short share codes

use chrono::{DateTime, SecondsFormat, Utc};
use listo_core::{ChecklistId, Error, Result, UserId, SHARE_CODE_LENGTH};
use sha2::{Digest, Sha256};
use std::fmt;

/// Eleven lowercase hex characters addressing a cached share token
///
/// Derived from a hash of the checklist, the owner and the issuance time.
/// Codes are very likely unique but collisions are not detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareCode(String);

impl ShareCode {
    pub fn generate(checklist_id: &ChecklistId, owner_id: &UserId, at: DateTime<Utc>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(checklist_id.as_bytes());
        hasher.update(owner_id.as_bytes());
        hasher.update(at.to_rfc3339_opts(SecondsFormat::Nanos, true).as_bytes());
        let digest = hex::encode(hasher.finalize());
        Self(digest[..SHARE_CODE_LENGTH].to_string())
    }

    /// Accept a code presented by a client
    ///
    /// Anything that could not have been generated is reported as an
    /// invalid code, the same as a cache miss.
    pub fn parse(raw: &str) -> Result<Self> {
        let valid = raw.len() == SHARE_CODE_LENGTH
            && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::share_code_invalid(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn ids() -> (ChecklistId, UserId) {
        (ChecklistId::new("c1").unwrap(), UserId::new("u1").unwrap())
    }

    #[test]
    fn test_generation_is_deterministic_per_instant() {
        let (checklist, owner) = ids();
        let at = Utc::now();

        let a = ShareCode::generate(&checklist, &owner, at);
        let b = ShareCode::generate(&checklist, &owner, at);
        let later = ShareCode::generate(&checklist, &owner, at + Duration::nanoseconds(1));

        assert_eq!(a, b);
        assert_ne!(a, later);
        assert_eq!(a.as_str().len(), 11);
    }

    #[test]
    fn test_parse_rejects_foreign_shapes() {
        for raw in ["", "abc", "9F86D081884", "9f86d08188z", "9f86d0818844", "../../etc/x"] {
            assert!(
                matches!(ShareCode::parse(raw), Err(Error::ShareCodeInvalid { .. })),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(ShareCode::parse("9f86d081884").unwrap().to_string(), "9f86d081884");
    }

    proptest! {
        #[test]
        fn prop_generated_codes_parse(
            checklist in "[a-z0-9-]{1,40}",
            owner in "[a-zA-Z0-9|]{1,40}",
            nanos in 0_i64..1_000_000_000_000,
        ) {
            let at = Utc.timestamp_nanos(nanos);
            let code = ShareCode::generate(
                &ChecklistId::new(checklist).unwrap(),
                &UserId::new(owner).unwrap(),
                at,
            );
            prop_assert_eq!(ShareCode::parse(code.as_str()).unwrap(), code);
        }
    }
}
