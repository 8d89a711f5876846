//! Sales and inventory report endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use reports::{DailySalesReport, InventoryStatusReport};
use serde::Deserialize;
use store::PosStore;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DailySalesQuery {
    /// Day to report on (`YYYY-MM-DD`); today (UTC) when absent.
    pub date: Option<NaiveDate>,
}

/// GET /reports/daily-sales — bill count and takings for one day.
#[tracing::instrument(skip(state, query))]
pub async fn daily_sales<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<DailySalesQuery>, QueryRejection>,
) -> Result<Json<DailySalesReport>, ApiError> {
    let Query(query) = query?;
    let report = match query.date {
        Some(date) => state.reports.daily_sales(date).await,
        None => state.reports.todays_sales().await,
    };
    Ok(Json(report))
}

/// GET /reports/inventory-status — low-stock and out-of-stock products.
#[tracing::instrument(skip(state))]
pub async fn inventory_status<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<InventoryStatusReport> {
    Json(state.reports.inventory_status().await)
}
