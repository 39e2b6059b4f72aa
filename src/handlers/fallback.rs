// src/handlers/fallback.rs
use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::AppError;

/// Any path no route matches.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

/// A known path called with a method it does not serve.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::method_not_allowed(format!("Method {} not allowed for {}", method, uri.path()))
}
