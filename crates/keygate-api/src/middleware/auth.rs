//! Bearer token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use keygate_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Authenticates a request from its `Authorization: Bearer <token>` header.
///
/// A missing header, a header that is not exactly `Bearer <credential>`,
/// or an empty credential is a 401. A credential that fails verification
/// is a 403 with a fixed message; verification internals never reach the
/// client. On success the decoded claims are attached to the request as an
/// [`AuthUser`] extension.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Authorization header missing"))?;

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AppError::unauthorized("Invalid authorization format").into());
    }

    let token = parts[1];
    if token.is_empty() {
        return Err(AppError::unauthorized("Token missing").into());
    }

    let claims = state.decoder.verify_access(token).map_err(|e| {
        debug!(error = %e, "Access token rejected");
        AppError::invalid_token("Invalid or expired token")
    })?;

    request.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(request).await)
}
