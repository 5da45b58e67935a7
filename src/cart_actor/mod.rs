//! # Cart Actor
//!
//! Holds every shopping cart in the marketplace and serves the storefront's
//! cart operations: adding and removing lines, clearing after checkout, and
//! producing the [`CartSummary`](crate::model::CartSummary) the checkout
//! workflow reads.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`]s beyond CRUD
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory returning the actor and its typed client
//!
//! ## Usage
//!
//! ```rust
//! use checkout_flow::cart_actor;
//! use checkout_flow::model::CartItem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = cart_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let cart_id = client.create_cart("user_1").await?;
//!     let summary = client.add_item(cart_id, CartItem::new("p1", "Garri", 1200, 2)).await?;
//!     assert_eq!(summary.total_price, 2400);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
