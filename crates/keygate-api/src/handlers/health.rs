//! Health check handler.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /api/health (no auth required)
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
