// src/app.rs
use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::handle_panic;
use crate::handlers::fallback::{method_not_allowed, route_not_found};
use crate::routes;
use crate::state::AppState;

/// Full HTTP application: product API under `/api/v1` plus liveness routes.
pub fn build_app(state: AppState) -> Router {
    let api = routes::create_router();

    Router::new()
        .route("/", get(|| async { "Product Catalog API" }))
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
