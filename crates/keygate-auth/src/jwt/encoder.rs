//! JWT token creation with configurable signing secrets and TTLs.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use keygate_core::config::auth::AuthConfig;
use keygate_core::error::{AppError, ErrorKind};
use keygate_core::result::AppResult;
use keygate_entity::token::SignedToken;

use super::claims::{Claims, ClaimsMap};

/// Creates signed JWT access and refresh tokens.
///
/// Access and refresh tokens are signed with separate secrets, so a token
/// of one kind never verifies as the other. Signing is synchronous pure
/// computation; the encoder holds no I/O resources.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret for access token signing.
    access_secret: String,
    /// HMAC secret for refresh token signing.
    refresh_secret: String,
    /// Access token TTL in seconds.
    access_ttl_seconds: u64,
    /// Refresh token TTL in seconds.
    refresh_ttl_seconds: u64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_ttl_seconds: config.access_ttl_seconds,
            refresh_ttl_seconds: config.refresh_ttl_seconds,
        }
    }

    /// Signs a new access token embedding the payload plus `iat`/`exp`.
    ///
    /// Fails with a configuration error if the access secret is empty or
    /// the access TTL is zero.
    pub fn sign_access(&self, payload: &ClaimsMap) -> AppResult<SignedToken> {
        if self.access_secret.is_empty() {
            return Err(AppError::configuration("Access token secret is not set"));
        }
        if self.access_ttl_seconds == 0 {
            return Err(AppError::configuration("Access token expiry is not set"));
        }
        self.sign(payload, &self.access_secret, self.access_ttl_seconds, "access")
    }

    /// Signs a new refresh token against the refresh secret and TTL.
    ///
    /// Does not persist anything; ledger insertion is the rotation
    /// manager's job, and no caller there signs a refresh token without
    /// persisting it.
    pub fn sign_refresh(&self, payload: &ClaimsMap) -> AppResult<SignedToken> {
        if self.refresh_secret.is_empty() {
            return Err(AppError::configuration(
                "Refresh token secret is not configured",
            ));
        }
        if self.refresh_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "Refresh token expiry is not configured",
            ));
        }
        self.sign(payload, &self.refresh_secret, self.refresh_ttl_seconds, "refresh")
    }

    fn sign(
        &self,
        payload: &ClaimsMap,
        secret: &str,
        ttl_seconds: u64,
        kind: &str,
    ) -> AppResult<SignedToken> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(ttl_seconds as i64);
        let claims = Claims::issue(payload, now, expires_at);

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Signing,
                format!("Failed to encode {kind} token: {e}"),
                e,
            )
        })?;

        Ok(SignedToken { token, expires_at })
    }
}
