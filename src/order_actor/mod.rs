//! # Order Actor
//!
//! Places orders from carts. The actor's context is a [`CartClient`], which
//! `Order::on_create` uses to snapshot the cart, reject it when empty, and
//! clear it once the order is stored. This is the in-process stand-in for the
//! storefront's `checkout()` endpoint.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{CartClient, OrderClient};
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// The [`CartClient`] dependency is injected later through
/// [`ResourceActor::run`].
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}

/// Context injected into the order actor.
pub type OrderContext = CartClient;
