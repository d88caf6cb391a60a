//! Role gate middleware for role-restricted routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use keygate_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Allows the request through only when the attached identity carries one
/// of the allowed roles.
///
/// Must run after the authenticate layer; a missing identity means that
/// layer did not run or failed open, which is a 401. The `role` claim is a
/// convention between the token issuer and this gate: a payload without it
/// is rejected with 403, as is a role outside `allowed`. An empty `allowed`
/// slice therefore rejects every request.
pub async fn require_role(
    allowed: &'static [&'static str],
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::unauthorized("Unauthorized: user not found"))?;

    let role = identity
        .role()
        .ok_or_else(|| AppError::forbidden("Forbidden: role missing from token"))?;

    if !allowed.iter().any(|r| *r == role) {
        return Err(AppError::forbidden("Access denied: you do not have the required role").into());
    }

    Ok(next.run(request).await)
}
