//! Authenticated example handlers behind the request gates.

use axum::Json;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;

/// GET /api/dashboard
pub async fn dashboard(auth: AuthUser) -> Json<MessageResponse> {
    let username = auth
        .payload()
        .get("username")
        .and_then(|v| v.as_str())
        .unwrap_or("stranger");

    Json(MessageResponse {
        message: format!("Hello, {username}"),
    })
}

/// GET /api/admin/status — reachable only through the admin role gate.
pub async fn admin_status() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome, admin".to_string(),
    })
}
