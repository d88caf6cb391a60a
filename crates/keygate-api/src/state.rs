//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use keygate_auth::jwt::TokenDecoder;
use keygate_auth::rotation::RefreshManager;
use keygate_core::config::AppConfig;

use crate::directory::UserDirectory;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Access token verifier used by the authenticate gate.
    pub decoder: Arc<TokenDecoder>,
    /// Refresh token issuance and rotation.
    pub refresh_manager: Arc<RefreshManager>,
    /// Known users for login.
    pub users: Arc<UserDirectory>,
}
