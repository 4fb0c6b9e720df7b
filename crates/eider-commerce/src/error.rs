//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product cannot be purchased right now.
    #[error("Product unavailable: {0}")]
    ProductUnavailable(String),

    /// Size not offered by the product.
    #[error("Size not found on product: {0}")]
    SizeNotFound(String),

    /// Fabric not offered by the product.
    #[error("Fabric not found on product: {0}")]
    FabricNotFound(String),

    /// Fabric category not offered by the product.
    #[error("Fabric category not found on product: {0}")]
    FabricCategoryNotFound(String),

    /// Selected fabric does not belong to the selected fabric category.
    #[error("Fabric {fabric} does not belong to category {category}")]
    FabricCategoryMismatch { fabric: String, category: String },

    /// A fabric references a category the product does not define.
    #[error("Fabric {fabric} references unknown category {category}")]
    FabricNotInCatalog { fabric: String, category: String },

    /// Custom dimension outside the allowed range.
    #[error("{dimension} {value}cm out of range ({min}-{max}cm)")]
    DimensionOutOfRange {
        dimension: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Lifting mechanism selected on a product that does not offer one.
    #[error("Lifting mechanism not available for product: {0}")]
    LiftingNotAvailable(String),

    /// Discount percentage outside 0-100.
    #[error("Discount percent out of range: {0}")]
    DiscountOutOfRange(u8),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Line not in cart.
    #[error("Line not in cart: {0}")]
    LineNotInCart(String),

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Shipping address is missing required fields.
    #[error("Incomplete shipping address")]
    IncompleteAddress,

    /// Invalid order status transition.
    #[error("Invalid order transition from {from} to {to}")]
    InvalidOrderTransition { from: String, to: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
