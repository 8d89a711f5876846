//! HTTP route handlers.

pub mod bills;
pub mod customers;
pub mod health;
pub mod metrics;
pub mod placeholders;
pub mod products;
pub mod reporting;

use reports::ReportService;
use serde::Serialize;
use store::PosStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: PosStore> {
    pub store: S,
    pub reports: ReportService<S>,
}

/// Plain `{ "message": ... }` payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
