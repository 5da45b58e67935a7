//! ActorEntity implementation for the [`Order`] domain type.
//!
//! Placing an order is the interesting part: [`Order::on_create`] runs inside
//! the order actor but reaches the cart actor through the injected
//! [`CartClient`](crate::clients::CartClient).

use super::error::OrderError;
use super::OrderContext;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if !params.payment_method.is_enabled() {
            return Err(OrderError::PaymentMethodUnavailable(
                params.payment_method.to_string(),
            ));
        }
        Ok(Order::new(id, params.cart_id, params.payment_method))
    }

    /// Takes the cart's lines into the order. The cart actor empties the cart
    /// and posts the "placed" notification in the same request, so nothing
    /// added concurrently can slip between the snapshot and the clear.
    ///
    /// # Errors
    /// - [`OrderError::EmptyCart`] when there is nothing to buy.
    /// - [`OrderError::Cart`] when the cart actor refuses a request.
    async fn on_create(&mut self, carts: &OrderContext) -> Result<(), OrderError> {
        let summary = carts
            .take_for_order(self.cart_id, &self.id.to_string())
            .await?;
        if summary.is_empty() {
            return Err(OrderError::EmptyCart(self.cart_id.to_string()));
        }
        debug!(order_id = %self.id, items = summary.cart_items.len(), "Cart taken");

        self.items = summary.cart_items;
        self.total_price = summary.total_price;
        info!(order_id = %self.id, cart_id = %self.cart_id, total = self.total_price, "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }
}
