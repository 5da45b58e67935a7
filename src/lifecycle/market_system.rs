use super::CheckoutConfig;
use crate::clients::{CartClient, OrderClient, StorefrontClient};
use crate::model::CartId;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runs the marketplace actors and hands out clients to them.
///
/// The cart actor starts with no context. The order actor is given a clone of
/// the [`CartClient`] so that placing an order can read and clear the cart.
///
/// ```ignore
/// let system = MarketSystem::new(&CheckoutConfig::default());
/// let cart_id = system.cart_client.create_cart("user_1").await?;
/// let storefront = system.storefront(cart_id);
/// // ... run checkout against the storefront ...
/// drop(storefront);
/// system.shutdown().await?;
/// ```
pub struct MarketSystem {
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    order_handle: JoinHandle<()>,
    cart_handle: JoinHandle<()>,
}

impl MarketSystem {
    /// Spawns both actors. Must be called inside a tokio runtime.
    pub fn new(config: &CheckoutConfig) -> Self {
        let (cart_actor, cart_client) = crate::cart_actor::new(config.actor_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.actor_buffer);

        let cart_handle = tokio::spawn(cart_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(cart_client.clone()));
        info!(buffer = config.actor_buffer, "Market system started");

        Self {
            cart_client,
            order_client,
            order_handle,
            cart_handle,
        }
    }

    /// A [`CartService`](crate::checkout::CartService) for one customer's cart.
    pub fn storefront(&self, cart_id: CartId) -> StorefrontClient {
        StorefrontClient::new(cart_id, self.cart_client.clone(), self.order_client.clone())
    }

    /// Stops both actors and waits for them to finish.
    ///
    /// An actor exits once every client to it is gone, so storefronts and
    /// other client clones must be dropped before this resolves. The order
    /// actor goes first because its context holds a cart client.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down market system...");

        drop(self.order_client);
        if let Err(e) = self.order_handle.await {
            error!("Order actor task failed: {:?}", e);
            return Err(format!("Order actor task failed: {:?}", e));
        }

        drop(self.cart_client);
        if let Err(e) = self.cart_handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Market system shutdown complete.");
        Ok(())
    }
}
