//! Root and health check endpoints.

use axum::Json;
use serde::Serialize;

use super::MessageResponse;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET / — confirms the API is reachable.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("StoreBuddy API is running"))
}

/// GET /health — returns system health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
