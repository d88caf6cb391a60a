//! Auth handlers — login, refresh, me.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use keygate_auth::jwt::Claims;
use keygate_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{AccessTokenResponse, TokenPairResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid login request: {e}")))?;

    let user = state
        .users
        .find(&req.username)
        .ok_or_else(|| AppError::unauthorized("Invalid user"))?;

    let pair = state.refresh_manager.issue_pair(&user.claims()).await?;

    info!(username = %user.username, "Login successful");

    Ok(Json(TokenPairResponse {
        access_token: pair.access_token.token,
        access_expires_at: pair.access_token.expires_at,
        refresh_token: pair.refresh_token.token,
        refresh_expires_at: pair.refresh_token.expires_at,
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    let access = state.refresh_manager.rotate(&req.token).await?;

    Ok(Json(AccessTokenResponse {
        access_token: access.token,
        expires_at: access.expires_at,
    }))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<Claims> {
    Json(auth.0)
}
