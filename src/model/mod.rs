//! Plain data types shared by the actors, clients and the checkout workflow.
//!
//! [`Cart`] and [`Order`] implement [`ActorEntity`](crate::framework::ActorEntity)
//! (see [`cart_actor`](crate::cart_actor) and [`order_actor`](crate::order_actor));
//! the rest are payloads that travel between checkout steps.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod user;

pub use cart::*;
pub use checkout::*;
pub use order::*;
pub use user::*;
