//! `AuthUser` extractor — the request-scoped identity context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use keygate_auth::jwt::Claims;
use keygate_core::error::AppError;

use crate::error::ApiError;

/// Verified identity claims attached to the in-flight request.
///
/// Inserted as a request extension by the authenticate middleware; routes
/// not wrapped in that layer have no identity and extraction fails with
/// 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl std::ops::Deref for AuthUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required").into())
    }
}
