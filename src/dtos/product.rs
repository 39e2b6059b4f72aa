// src/dtos/product.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /product` and `PUT /product/{id}`. Never carries an id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductCommand {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Read projection returned by every product endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductQuery {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
}
