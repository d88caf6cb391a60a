//! Refresh token issuance and rotation against the ledger.

use std::sync::Arc;

use tracing::{debug, info};

use keygate_core::error::{AppError, ErrorKind};
use keygate_core::result::AppResult;
use keygate_core::traits::RefreshTokenLedger;
use keygate_entity::token::{SignedToken, TokenPair};

use crate::jwt::{ClaimsMap, TokenDecoder, TokenEncoder};

/// Issues refresh tokens into the ledger and exchanges them for fresh
/// access tokens.
///
/// A presented refresh token is accepted only when it is a ledger member
/// AND its signature verifies AND it is unexpired, in that order. Rotation
/// does not retire the presented token: it stays in the ledger and can be
/// exchanged again until its own expiry.
#[derive(Clone)]
pub struct RefreshManager {
    /// Token encoder for signing.
    encoder: Arc<TokenEncoder>,
    /// Token decoder for verification.
    decoder: Arc<TokenDecoder>,
    /// Persisted set of currently-issued refresh tokens.
    ledger: Arc<dyn RefreshTokenLedger>,
}

impl std::fmt::Debug for RefreshManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshManager")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl RefreshManager {
    /// Creates a new rotation manager.
    pub fn new(
        encoder: Arc<TokenEncoder>,
        decoder: Arc<TokenDecoder>,
        ledger: Arc<dyn RefreshTokenLedger>,
    ) -> Self {
        Self {
            encoder,
            decoder,
            ledger,
        }
    }

    /// Signs a refresh token and records it in the ledger.
    ///
    /// If signing succeeds but insertion fails, the signed token is
    /// discarded and never returned; no retry is attempted.
    pub async fn issue_refresh(&self, payload: &ClaimsMap) -> AppResult<SignedToken> {
        let signed = self.encoder.sign_refresh(payload)?;
        self.ledger.insert(&signed.token).await?;

        debug!(expires_at = %signed.expires_at, "Refresh token issued");
        Ok(signed)
    }

    /// Issues a login-time access + refresh token pair.
    pub async fn issue_pair(&self, payload: &ClaimsMap) -> AppResult<TokenPair> {
        let access_token = self.encoder.sign_access(payload)?;
        let refresh_token = self.issue_refresh(payload).await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Exchanges a refresh token for a newly minted access token.
    ///
    /// Checks run in a fixed order: input shape, refresh secret presence,
    /// ledger membership, then signature/expiry. Membership is checked
    /// before signature verification, so an unknown string is rejected as
    /// revoked even if it would verify. The decoded payload is re-signed
    /// without its timing claims.
    pub async fn rotate(&self, old_token: &str) -> AppResult<SignedToken> {
        if old_token.trim().is_empty() {
            return Err(AppError::validation(
                "Refresh token must be provided and must be a string",
            ));
        }

        if !self.decoder.refresh_secret_configured() {
            return Err(AppError::configuration(
                "Refresh token secret is not configured",
            ));
        }

        if !self.ledger.exists(old_token).await? {
            return Err(AppError::revoked_token("Invalid or revoked refresh token"));
        }

        let claims = self.decoder.verify_refresh(old_token)?;

        let access = self.encoder.sign_access(claims.payload()).map_err(|e| {
            AppError::with_source(ErrorKind::Issuance, "Failed to mint new access token", e)
        })?;

        info!(expires_at = %access.expires_at, "Access token rotated from refresh token");
        Ok(access)
    }
}
