//! Refresh token ledger trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// The persisted set of currently-issued refresh tokens.
///
/// A refresh token string is a valid credential for minting new access
/// tokens only while a row with that exact string is a member of the
/// ledger. The ledger exposes no update or delete operation: rotation
/// never retires a presented token, and rows fall out of use when their
/// embedded signature expires.
///
/// Implementations: the PostgreSQL repository in `keygate-database` and
/// an in-memory set in `keygate-auth` for single-node deployments and
/// tests. Consistency is delegated to the backing store's single-row
/// guarantees; no multi-row transactions are required.
#[async_trait]
pub trait RefreshTokenLedger: Send + Sync + 'static {
    /// Add a token string to the ledger.
    ///
    /// Fails with a database error (uniqueness violation included) if the
    /// insert cannot complete.
    async fn insert(&self, token: &str) -> AppResult<()>;

    /// Whether exactly one row with this token string is present.
    /// Exact string equality, no partial matches.
    async fn exists(&self, token: &str) -> AppResult<bool>;
}
