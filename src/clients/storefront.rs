//! # Storefront Client
//!
//! Binds one customer's cart to the cart and order actors and exposes them to
//! checkout as a [`CartService`].
use crate::cart_actor::CartError;
use crate::checkout::{CartService, CheckoutError};
use crate::clients::{CartClient, OrderClient};
use crate::model::{CartId, CartSummary, OrderCreate, OrderResult, PaymentMethod};
use async_trait::async_trait;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct StorefrontClient {
    cart_id: CartId,
    carts: CartClient,
    orders: OrderClient,
}

impl StorefrontClient {
    pub fn new(cart_id: CartId, carts: CartClient, orders: OrderClient) -> Self {
        Self {
            cart_id,
            carts,
            orders,
        }
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }
}

#[async_trait]
impl CartService for StorefrontClient {
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    async fn fetch_cart(&self) -> Result<CartSummary, CartError> {
        self.carts.summary(self.cart_id).await
    }

    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    async fn checkout(&self, payment_method: PaymentMethod) -> Result<OrderResult, CheckoutError> {
        let order_id = self
            .orders
            .place_order(OrderCreate {
                cart_id: self.cart_id,
                payment_method,
            })
            .await?;
        info!(%order_id, "Checkout accepted");
        Ok(self.orders.receipt(order_id).await?)
    }
}
