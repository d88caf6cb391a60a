//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The caller-supplied identity payload: an open key/value map.
///
/// Keygate imposes no schema on it. The `role` key is a convention-only
/// contract between the token issuer and the role gate; the codec neither
/// requires nor validates it.
pub type ClaimsMap = serde_json::Map<String, serde_json::Value>;

/// JWT claims payload embedded in every issued token.
///
/// Timing claims are typed fields; everything else rides in the flattened
/// `extra` map. On decode this means `extra` is exactly the identity
/// payload with `iat`/`exp` already separated out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Open identity payload.
    #[serde(flatten)]
    pub extra: ClaimsMap,
}

impl Claims {
    /// Build claims for a new token. Timing keys in the caller payload are
    /// dropped; the embedded `iat`/`exp` values are authoritative.
    pub fn issue(payload: &ClaimsMap, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        let mut extra = payload.clone();
        extra.remove("iat");
        extra.remove("exp");
        Self {
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            extra,
        }
    }

    /// The identity payload without timing claims.
    pub fn payload(&self) -> &ClaimsMap {
        &self.extra
    }

    /// The `role` value, if the payload carries one as a string.
    pub fn role(&self) -> Option<&str> {
        self.extra.get("role").and_then(|v| v.as_str())
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
