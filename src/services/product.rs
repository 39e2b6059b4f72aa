use std::sync::Arc;

use tracing::error;

use crate::dtos::product::ProductCommand;
use crate::error::{AppError, AppResult};
use crate::mappers::product::ProductMapper;
use crate::models::product::Product;
use crate::stores::product::ProductStore;

/// Product use cases. Every operation addressed by id checks that the row
/// exists before touching it; that lookup is never cached.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    mapper: ProductMapper,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, mapper: ProductMapper) -> Self {
        Self { store, mapper }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Product> {
        self.require_existing(id, "find_by_id").await
    }

    /// Duplicate titles are allowed.
    pub async fn create(&self, command: ProductCommand) -> AppResult<Product> {
        let product = self.mapper.from_command_to_product(command);
        self.store.save(product).await
    }

    /// Replaces every field of the row with the command's values.
    pub async fn update(&self, id: i64, command: ProductCommand) -> AppResult<Product> {
        self.require_existing(id, "update").await?;

        let mut product = self.mapper.from_command_to_product(command);
        product.id = Some(id);
        tracing::debug!(?product, "Replacing product");

        self.store.save(product).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let product = self.require_existing(id, "delete").await?;
        self.store.delete(product).await
    }

    async fn require_existing(&self, id: i64, operation: &'static str) -> AppResult<Product> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            error!(operation, product_id = id, "Product not found");
            AppError::not_found(format!("Product with id {id} not found"))
        })
    }
}
