//! Route definitions for the Keygate HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{auth::authenticate, rbac};
use crate::state::AppState;

/// Roles allowed through the admin gate.
const ADMIN_ROLES: &[&str] = &["admin"];

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/health", get(handlers::health::health_check));

    let protected_routes = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    let admin_routes = Router::new()
        .route("/admin/status", get(handlers::dashboard::admin_status))
        .layer(axum_middleware::from_fn(|req, next| {
            rbac::require_role(ADMIN_ROLES, req, next)
        }))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    Router::new()
        .nest(
            "/api",
            public_routes.merge(protected_routes).merge(admin_routes),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
