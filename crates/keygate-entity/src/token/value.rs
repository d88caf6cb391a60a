//! Issued-token value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A freshly signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedToken {
    /// The raw token string.
    pub token: String,
    /// Absolute expiration timestamp embedded in the token.
    pub expires_at: DateTime<Utc>,
}

/// A pair of access and refresh tokens returned on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: SignedToken,
    /// Long-lived refresh token, persisted in the ledger.
    pub refresh_token: SignedToken,
}
