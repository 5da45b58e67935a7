//! Error types for the Order actor.

use crate::cart_actor::CartError;
use thiserror::Error;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Checkout was attempted on a cart with no items.
    #[error("Cart {0} is empty")]
    EmptyCart(String),

    /// The payment method is shown in the form but cannot be used.
    #[error("Payment method unavailable: {0}")]
    PaymentMethodUnavailable(String),

    /// The cart actor rejected a request made while placing the order.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
