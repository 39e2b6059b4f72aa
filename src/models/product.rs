use sqlx::FromRow;

/// Longest title the `products.title` column accepts.
pub const TITLE_MAX_LEN: usize = 100;

/// Row of the `products` table.
///
/// `id` is `None` until the store has assigned one.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
}
