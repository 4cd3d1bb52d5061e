//! Core error types

use thiserror::Error;

/// Errors raised while building the catalog index.
///
/// The catalog is validated once at startup; a bad seed is a deployment
/// problem, so these are fatal rather than recoverable.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog has no categories")]
    Empty,

    #[error("Category '{0}' has no products")]
    EmptyCategory(String),

    #[error("Duplicate product name: {0}")]
    DuplicateProduct(String),

    #[error("Product '{name}': price must be positive")]
    InvalidPrice { name: String },

    #[error("Product '{name}': original price {original} must exceed price {price}")]
    InvalidOriginalPrice {
        name: String,
        original: u32,
        price: u32,
    },

    #[error("Product '{name}': rating {rating} outside 0.0..=5.0")]
    InvalidRating { name: String, rating: f32 },
}

/// Errors raised when a flat wire reply violates the action-tag invariant.
///
/// Replies produced internally satisfy the invariant by construction; this
/// only fires when converting untrusted input (e.g. remote model output).
#[derive(Error, Debug)]
pub enum ReplyError {
    #[error("item_added reply carries no cart items")]
    MissingCartItems,

    #[error("{action} reply carries no total price")]
    MissingTotal { action: String },
}
