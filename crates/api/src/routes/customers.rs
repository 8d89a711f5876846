//! Customer directory endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{Customer, CustomerId};
use store::PosStore;

use super::AppState;
use crate::error::ApiError;

/// GET /customers — list every customer.
#[tracing::instrument(skip(state))]
pub async fn list<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<Customer>> {
    Json(state.store.list_customers().await)
}

/// POST /customers — register a customer with a caller-chosen ID.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let Json(customer) = body?;
    let customer = state.store.add_customer(customer).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers/:id — fetch one customer.
#[tracing::instrument(skip(state, id))]
pub async fn get<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.store.get_customer(id).await?))
}
