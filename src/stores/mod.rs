pub mod postgres;
pub mod product;

pub use postgres::PgProductStore;
pub use product::{InMemoryProductStore, ProductStore};
