//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// A line was added with a zero quantity.
    #[error("Invalid quantity for {product_id}: {quantity}")]
    InvalidQuantity { product_id: String, quantity: u32 },

    /// Adding the line would push a quantity or a total past what the cart can hold.
    #[error("Quantity too large for {0}")]
    QuantityOverflow(String),

    /// The product is not in the cart.
    #[error("Product not in cart: {0}")]
    ItemNotInCart(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
