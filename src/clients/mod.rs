//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient),
//! plus the [`StorefrontClient`] that presents both actors to checkout as a
//! single [`CartService`](crate::checkout::CartService).

pub mod actor_client;
pub mod cart_client;
pub mod order_client;
pub mod storefront;

pub use actor_client::ActorClient;
pub use cart_client::*;
pub use order_client::*;
pub use storefront::*;
