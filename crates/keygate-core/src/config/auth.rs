//! Credential signing configuration.

use serde::{Deserialize, Serialize};

/// Token signing and expiry configuration.
///
/// The built-in defaults are placeholders; deployments override the two
/// secrets before serving traffic. Empty secrets and zero TTLs are
/// reported at sign/verify time, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    #[serde(default = "default_access_secret")]
    pub access_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    #[serde(default = "default_refresh_secret")]
    pub refresh_secret: String,
    /// Access token TTL in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_seconds: u64,
    /// Refresh token TTL in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: default_access_secret(),
            refresh_secret: default_refresh_secret(),
            access_ttl_seconds: default_access_ttl(),
            refresh_ttl_seconds: default_refresh_ttl(),
        }
    }
}

fn default_access_secret() -> String {
    "default-access-secret".to_string()
}

fn default_refresh_secret() -> String {
    "default-refresh-secret".to_string()
}

fn default_access_ttl() -> u64 {
    // 15 minutes
    900
}

fn default_refresh_ttl() -> u64 {
    // 7 days
    604_800
}
