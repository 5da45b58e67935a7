//! Error types for the checkout workflow.

use crate::cart_actor::CartError;
use crate::model::CheckoutStep;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Shown when a failed submission carries no message of its own.
pub const GENERIC_PAYMENT_ERROR: &str = "Failed to process payment. Please try again.";

/// Validation failures raised by the step forms before anything is sent upward.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The option is listed but disabled (express delivery, wallet payment).
    #[error("{0} is not available yet")]
    OptionUnavailable(String),
}

/// Errors surfaced by the checkout controller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Please log in to continue to checkout")]
    NotAuthenticated,

    /// A step handler was invoked while another step is showing.
    #[error("{expected} step is not active (currently on {current})")]
    StepMismatch {
        current: CheckoutStep,
        expected: CheckoutStep,
    },

    #[error("Your cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{0}")]
    Cart(#[from] CartError),

    #[error("{0}")]
    Order(#[from] OrderError),

    /// Rejection reported by the storefront, carried verbatim.
    #[error("{0}")]
    Rejected(String),
}

impl CheckoutError {
    /// The line shown under the payment form: the error's own message, or the
    /// generic fallback when it has none.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_PAYMENT_ERROR.to_string()
        } else {
            message
        }
    }
}
