use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::product::{Product, TITLE_MAX_LEN};

/// Persistence for the `products` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows, in the store's natural order.
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Inserts when `product.id` is `None`, otherwise overwrites the row with
    /// that id. Returns the stored row with its id populated.
    async fn save(&self, product: Product) -> AppResult<Product>;

    /// Removes the row carrying `product.id`. A product without an id is an
    /// illegal argument.
    async fn delete(&self, product: Product) -> AppResult<()>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory store (for development/testing). Applies the same column
/// limits as the SQL table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `products`; rows without an id get one.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut table = Table::default();
        for product in products {
            table.insert(product);
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

impl Table {
    fn insert(&mut self, mut product: Product) -> Product {
        let id = match product.id {
            Some(id) => {
                self.last_id = self.last_id.max(id);
                id
            }
            None => {
                self.last_id += 1;
                self.last_id
            }
        };
        product.id = Some(id);
        self.rows.insert(id, product.clone());
        product
    }
}

fn check_columns(product: &Product) -> AppResult<()> {
    if product.title.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::constraint(
            "could not save product",
            Some(format!(
                "value too long for type character varying({TITLE_MAX_LEN})"
            )),
        ));
    }
    Ok(())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        check_columns(&product)?;

        let mut table = self.table.write().await;
        let saved = table.insert(product);

        tracing::debug!(product_id = ?saved.id, "Saved product");
        Ok(saved)
    }

    async fn delete(&self, product: Product) -> AppResult<()> {
        let id = product
            .id
            .ok_or_else(|| AppError::illegal_argument("The given id must not be null"))?;

        let mut table = self.table.write().await;
        table.rows.remove(&id);

        tracing::debug!(product_id = id, "Deleted product");
        Ok(())
    }
}
