//! Keygate Server — bearer credential issuance and verification service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use keygate_api::directory::{DirectoryUser, UserDirectory};
use keygate_api::state::AppState;
use keygate_auth::jwt::{TokenDecoder, TokenEncoder};
use keygate_auth::rotation::RefreshManager;
use keygate_core::config::AppConfig;
use keygate_core::error::AppError;
use keygate_core::traits::RefreshTokenLedger;
use keygate_database::repositories::RefreshTokenRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("KEYGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Keygate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = keygate_database::DatabasePool::connect(&config.database).await?;

    keygate_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Initialize credential components ─────────────────
    let encoder = Arc::new(TokenEncoder::new(&config.auth));
    let decoder = Arc::new(TokenDecoder::new(&config.auth));

    let repository = RefreshTokenRepository::new(db.pool().clone());
    let ledger: Arc<dyn RefreshTokenLedger> = Arc::new(repository.clone());

    let refresh_manager = Arc::new(RefreshManager::new(
        Arc::clone(&encoder),
        Arc::clone(&decoder),
        ledger,
    ));

    // ── Step 3: Start ledger purge task ──────────────────────────
    // Rows older than the refresh TTL carry signatures that no longer
    // verify; reclaim them periodically so the ledger does not grow
    // without bound. Rotation itself never deletes.
    let refresh_ttl_seconds = config.auth.refresh_ttl_seconds.max(60);
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(refresh_ttl_seconds));
        loop {
            interval.tick().await;
            let cutoff =
                chrono::Utc::now() - chrono::Duration::seconds(refresh_ttl_seconds as i64);
            match repository.purge_created_before(cutoff).await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "Purged expired refresh tokens"),
                Err(e) => tracing::error!(error = %e, "Refresh token purge failed"),
            }
        }
    });

    // ── Step 4: Seed the user directory ──────────────────────────
    // Stand-in for an external user store; see keygate-api::directory.
    let mut users = UserDirectory::new();
    users.insert(DirectoryUser::new("admin", "admin"));
    users.insert(DirectoryUser::new("user", "user"));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        decoder,
        refresh_manager,
        users: Arc::new(users),
    };

    let app = keygate_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Keygate server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Keygate server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
