//! Refresh token ledger entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A ledger row for an issued refresh token.
///
/// Rows are created when a refresh token is issued and are never updated
/// in place. Each issued refresh token is an independent row; there is no
/// revoke-and-reissue linkage between them. The `token` column carries a
/// uniqueness constraint, so membership lookups match at most one row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshTokenRecord {
    /// Unique row identifier.
    pub id: Uuid,
    /// The signed refresh token string itself.
    pub token: String,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
    /// Last modification time. Equal to `created_at` in practice, since
    /// rows are insert-only.
    pub updated_at: DateTime<Utc>,
}
