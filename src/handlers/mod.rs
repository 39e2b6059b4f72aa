pub mod fallback;
pub mod product;
