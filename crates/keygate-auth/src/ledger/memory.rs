//! In-memory refresh token ledger using a Tokio mutex.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use keygate_core::error::AppError;
use keygate_core::result::AppResult;
use keygate_core::traits::RefreshTokenLedger;

/// In-memory refresh token ledger.
///
/// Suitable for single-node deployments and tests. Duplicate inserts are
/// rejected, mirroring the uniqueness constraint of the database-backed
/// ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    /// Set of currently-issued refresh token strings.
    tokens: Arc<Mutex<HashSet<String>>>,
}

impl MemoryLedger {
    /// Creates an empty in-memory ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefreshTokenLedger for MemoryLedger {
    async fn insert(&self, token: &str) -> AppResult<()> {
        let mut tokens = self.tokens.lock().await;
        if !tokens.insert(token.to_string()) {
            return Err(AppError::database("Refresh token already present in ledger"));
        }
        debug!(count = tokens.len(), "Refresh token stored in memory ledger");
        Ok(())
    }

    async fn exists(&self, token: &str) -> AppResult<bool> {
        let tokens = self.tokens.lock().await;
        Ok(tokens.contains(token))
    }
}
