//! Endpoints for features that are announced but not built yet.

use axum::Json;

use super::MessageResponse;

fn coming_soon(feature: &str) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "{feature} feature coming soon"
    )))
}

/// GET /ai-marketing
pub async fn ai_marketing() -> Json<MessageResponse> {
    coming_soon("AI Marketing")
}

/// GET /franchise-management
pub async fn franchise_management() -> Json<MessageResponse> {
    coming_soon("Franchise Management")
}

/// GET /accounting
pub async fn accounting() -> Json<MessageResponse> {
    coming_soon("Accounting")
}
