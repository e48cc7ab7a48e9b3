//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Store mutations only fail when the storage backend does; everything the
/// shopper can do wrong (duplicate adds, removing missing items, odd filter
/// values) degrades to a no-op instead.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid discount code.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),

    /// Order submission was rejected.
    #[error("Order submission failed: {0}")]
    OrderFailed(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<lustre_cache::CacheError> for CommerceError {
    fn from(e: lustre_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
