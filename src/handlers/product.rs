// src/handlers/product.rs
use axum::extract::State;
use tracing::instrument;

use crate::dtos::product::{ProductCommand, ProductQuery};
use crate::error::AppError;
use crate::extractors::{AppJson, AppPath};
use crate::state::AppState;

// GET /product - List all products
#[instrument(skip(state))]
pub async fn find_all_products(State(state): State<AppState>) -> Result<AppJson<Vec<ProductQuery>>, AppError> {
    let products = state.product_service.find_all().await?;
    Ok(AppJson(state.product_mapper.from_products_to_queries(products)))
}

// GET /product/{id} - Get single product
#[instrument(skip(state))]
pub async fn find_product_by_id(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<AppJson<ProductQuery>, AppError> {
    let product = state.product_service.find_by_id(id).await?;
    Ok(AppJson(state.product_mapper.from_product_to_query(product)))
}

// POST /product - Create new product
#[instrument(skip(state, command))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(command): AppJson<ProductCommand>,
) -> Result<AppJson<ProductQuery>, AppError> {
    let created = state.product_service.create(command).await?;
    tracing::info!(product_id = ?created.id, "Created product");
    Ok(AppJson(state.product_mapper.from_product_to_query(created)))
}

// PUT /product/{id} - Replace product
#[instrument(skip(state, command))]
pub async fn update_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(command): AppJson<ProductCommand>,
) -> Result<AppJson<ProductQuery>, AppError> {
    let updated = state.product_service.update(id, command).await?;
    Ok(AppJson(state.product_mapper.from_product_to_query(updated)))
}

// DELETE /product/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<(), AppError> {
    state.product_service.delete(id).await?;
    tracing::info!(product_id = id, "Deleted product");
    Ok(())
}
