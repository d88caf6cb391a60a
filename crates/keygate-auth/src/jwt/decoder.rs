//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use keygate_core::config::auth::AuthConfig;
use keygate_core::error::AppError;
use keygate_core::result::AppResult;

use super::claims::Claims;

/// Validates JWT tokens against the configured secrets.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret for access token verification.
    access_secret: String,
    /// HMAC secret for refresh token verification.
    refresh_secret: String,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // A token is expired the moment now >= exp; no clock-skew leeway.
        validation.leeway = 0;

        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// On success returns the full claims, timing fields included.
    pub fn verify_access(&self, token: &str) -> AppResult<Claims> {
        if token.trim().is_empty() {
            return Err(AppError::validation(
                "Access token must be a non-empty string",
            ));
        }
        if self.access_secret.is_empty() {
            return Err(AppError::configuration(
                "Access token secret is not configured",
            ));
        }
        self.decode_token(token, &self.access_secret)
    }

    /// Decodes and validates a refresh token string.
    pub fn verify_refresh(&self, token: &str) -> AppResult<Claims> {
        if token.trim().is_empty() {
            return Err(AppError::validation(
                "Refresh token must be a non-empty string",
            ));
        }
        if self.refresh_secret.is_empty() {
            return Err(AppError::configuration(
                "Refresh token secret is not configured",
            ));
        }
        self.decode_token(token, &self.refresh_secret)
    }

    /// Whether a refresh secret is present at all.
    pub fn refresh_secret_configured(&self) -> bool {
        !self.refresh_secret.is_empty()
    }

    fn decode_token(&self, token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &self.validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::invalid_token("Token has expired")
            }
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                AppError::invalid_token("Invalid token signature")
            }
            jsonwebtoken::errors::ErrorKind::InvalidToken => {
                AppError::invalid_token("Invalid token format")
            }
            _ => AppError::invalid_token(format!("Token validation failed: {e}")),
        })?;

        Ok(token_data.claims)
    }
}
