//! The cart/checkout collaborator the controller depends on.

use super::error::CheckoutError;
use crate::cart_actor::CartError;
use crate::model::{CartSummary, OrderResult, PaymentMethod};
use async_trait::async_trait;

/// Storefront operations checkout needs: read the cart, place the order.
///
/// [`StorefrontClient`](crate::clients::StorefrontClient) implements this on
/// top of the cart and order actors; tests substitute scripted fakes.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Loads the current cart contents.
    async fn fetch_cart(&self) -> Result<CartSummary, CartError>;

    /// Finalizes the order for the current cart.
    async fn checkout(&self, payment_method: PaymentMethod) -> Result<OrderResult, CheckoutError>;
}
