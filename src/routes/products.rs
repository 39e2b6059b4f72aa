use axum::{routing::get, Router};
use crate::handlers::fallback::method_not_allowed;
use crate::handlers::product::{
    create_product, delete_product, find_all_products, find_product_by_id, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product", get(find_all_products).post(create_product))
        .route(
            "/product/{id}",
            get(find_product_by_id).put(update_product).delete(delete_product),
        )
        .method_not_allowed_fallback(method_not_allowed)
}
