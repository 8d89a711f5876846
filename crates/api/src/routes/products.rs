//! Product catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{Product, ProductId};
use store::PosStore;

use super::{AppState, MessageResponse};
use crate::error::ApiError;

/// GET /products — list every product.
#[tracing::instrument(skip(state))]
pub async fn list<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<Product>> {
    Json(state.store.list_products().await)
}

/// POST /products — add a product with a caller-chosen ID.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(product) = body?;
    let product = state.store.add_product(product).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/:id — fetch one product.
#[tracing::instrument(skip(state, id))]
pub async fn get<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.store.get_product(id).await?))
}

/// PUT /products/:id — replace a product, keeping the ID from the path.
#[tracing::instrument(skip(state, id, body))]
pub async fn update<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let Json(product) = body?;
    Ok(Json(state.store.update_product(id, product).await?))
}

/// DELETE /products/:id — remove a product.
#[tracing::instrument(skip(state, id))]
pub async fn delete<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    let removed = state.store.delete_product(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Product {} deleted",
        removed.id
    ))))
}
