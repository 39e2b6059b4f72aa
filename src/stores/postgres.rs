use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use crate::error::{AppError, AppResult};
use crate::models::product::Product;
use crate::stores::product::ProductStore;

/// `products` table in Postgres.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT id, title, description, price::FLOAT8 AS price
             FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to fetch products");
            e.into()
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, title, description, price::FLOAT8 AS price
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        let saved = match product.id {
            None => {
                sqlx::query_as::<_, Product>(
                    "INSERT INTO products (title, description, price)
                     VALUES ($1, $2, $3)
                     RETURNING id, title, description, price::FLOAT8 AS price",
                )
                .bind(&product.title)
                .bind(&product.description)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await?
            }
            // Last write wins; no version check.
            Some(id) => {
                sqlx::query_as::<_, Product>(
                    "INSERT INTO products (id, title, description, price)
                     VALUES ($1, $2, $3, $4)
                     ON CONFLICT (id) DO UPDATE SET
                         title = EXCLUDED.title,
                         description = EXCLUDED.description,
                         price = EXCLUDED.price
                     RETURNING id, title, description, price::FLOAT8 AS price",
                )
                .bind(id)
                .bind(&product.title)
                .bind(&product.description)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await?
            }
        };

        tracing::debug!(product_id = ?saved.id, "Saved product");
        Ok(saved)
    }

    async fn delete(&self, product: Product) -> AppResult<()> {
        let id = product
            .id
            .ok_or_else(|| AppError::illegal_argument("The given id must not be null"))?;

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(product_id = id, "Deleted product");
        Ok(())
    }
}
