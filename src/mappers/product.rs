use crate::dtos::product::{ProductCommand, ProductQuery};
use crate::models::product::Product;

/// Field-by-field translation between the wire DTOs and the `products` row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    /// The returned product has no id; the store assigns one on save.
    pub fn from_command_to_product(&self, command: ProductCommand) -> Product {
        Product {
            id: None,
            title: command.title,
            description: command.description,
            price: command.price,
        }
    }

    pub fn from_product_to_query(&self, product: Product) -> ProductQuery {
        ProductQuery {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
        }
    }

    pub fn from_products_to_queries(&self, products: Vec<Product>) -> Vec<ProductQuery> {
        products
            .into_iter()
            .map(|product| self.from_product_to_query(product))
            .collect()
    }
}
