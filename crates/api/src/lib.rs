//! HTTP API server for the point-of-sale back end.
//!
//! Provides REST endpoints for products, customers, billing and reports,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use reports::ReportService;
use store::{InMemoryStore, PosStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: PosStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::check))
        .route(
            "/products",
            get(routes::products::list::<S>).post(routes::products::create::<S>),
        )
        .route(
            "/products/{id}",
            get(routes::products::get::<S>)
                .put(routes::products::update::<S>)
                .delete(routes::products::delete::<S>),
        )
        .route(
            "/customers",
            get(routes::customers::list::<S>).post(routes::customers::create::<S>),
        )
        .route("/customers/{id}", get(routes::customers::get::<S>))
        .route("/bill", post(routes::bills::create::<S>))
        .route("/bills", get(routes::bills::list::<S>))
        .route(
            "/reports/daily-sales",
            get(routes::reporting::daily_sales::<S>),
        )
        .route(
            "/reports/inventory-status",
            get(routes::reporting::inventory_status::<S>),
        )
        .route("/ai-marketing", get(routes::placeholders::ai_marketing))
        .route(
            "/franchise-management",
            get(routes::placeholders::franchise_management),
        )
        .route("/accounting", get(routes::placeholders::accounting))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by an empty in-memory store.
pub fn create_default_state(config: &Config) -> Arc<AppState<InMemoryStore>> {
    let store = InMemoryStore::new();
    let reports =
        ReportService::new(store.clone()).with_low_stock_threshold(config.low_stock_threshold);

    Arc::new(AppState { store, reports })
}
