//! A placed order.
//!
//! # Actor Framework
//! Managed by a [`ResourceActor`](crate::framework::ResourceActor); placing an
//! order pulls the cart through the order actor's context, see
//! [`order_actor`](crate::order_actor).
use crate::model::{Amount, CartId, CartItem, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle of an order. Checkout only ever produces placed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Placed,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub cart_id: CartId,
    pub payment_method: PaymentMethod,
    pub items: Vec<CartItem>,
    pub total_price: Amount,
    pub status: OrderStatus,
}

impl Order {
    /// A new placed order with no items yet; the items are
    /// snapshotted from the cart when the actor runs `on_create`.
    pub fn new(id: OrderId, cart_id: CartId, payment_method: PaymentMethod) -> Self {
        Self {
            id,
            cart_id,
            payment_method,
            items: Vec::new(),
            total_price: 0,
            status: OrderStatus::Placed,
        }
    }

    pub fn to_result(&self) -> OrderResult {
        OrderResult {
            order_id: self.id.to_string(),
            cart_id: self.cart_id,
            payment_method: self.payment_method,
            items: self.items.clone(),
            total_price: self.total_price,
            status: self.status,
        }
    }
}

/// Payload for placing an order from a cart.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart_id: CartId,
    pub payment_method: PaymentMethod,
}

/// What `checkout()` hands back to the storefront.
///
/// Serialized the way the storefront API returns it; the checkout workflow
/// itself only reads `order_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_id: String,
    pub cart_id: CartId,
    pub payment_method: PaymentMethod,
    pub items: Vec<CartItem>,
    pub total_price: Amount,
    pub status: OrderStatus,
}
