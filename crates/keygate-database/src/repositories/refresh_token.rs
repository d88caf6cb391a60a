//! Refresh token ledger repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use keygate_core::error::{AppError, ErrorKind};
use keygate_core::result::AppResult;
use keygate_core::traits::RefreshTokenLedger;
use keygate_entity::token::RefreshTokenRecord;

/// PostgreSQL-backed implementation of the refresh token ledger.
#[derive(Debug, Clone)]
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    /// Create a new refresh token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new ledger row and return it.
    ///
    /// A uniqueness violation on the token column surfaces as a database
    /// error with the driver error as cause.
    pub async fn create(&self, token: &str) -> AppResult<RefreshTokenRecord> {
        sqlx::query_as::<_, RefreshTokenRecord>(
            "INSERT INTO refresh_tokens (token) VALUES ($1) RETURNING *",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store refresh token", e)
        })
    }

    /// Whether a row with exactly this token string exists.
    pub async fn token_exists(&self, token: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to look up refresh token", e)
        })
    }

    /// Delete ledger rows created before the cutoff.
    ///
    /// Rows older than the refresh TTL carry signatures that can no longer
    /// verify, so purging them does not change which tokens are accepted.
    /// Returns the number of rows removed.
    pub async fn purge_created_before(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge refresh tokens", e)
            })?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RefreshTokenLedger for RefreshTokenRepository {
    async fn insert(&self, token: &str) -> AppResult<()> {
        self.create(token).await?;
        Ok(())
    }

    async fn exists(&self, token: &str) -> AppResult<bool> {
        self.token_exists(token).await
    }
}
