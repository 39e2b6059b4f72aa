// src/state.rs
use crate::mappers::product::ProductMapper;
use crate::services::product::ProductService;

/// Collaborators shared by every handler, assembled once at startup.
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub product_mapper: ProductMapper,
}

impl AppState {
    pub fn new(product_service: ProductService, product_mapper: ProductMapper) -> Self {
        Self {
            product_service,
            product_mapper,
        }
    }
}
