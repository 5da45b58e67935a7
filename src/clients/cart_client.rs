//! # Cart Client
//!
//! High-level API over the Cart actor.
use crate::cart_actor::{CartAction, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartId, CartItem, CartSummary};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_cart(&self, owner: &str) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate {
                owner: owner.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, item), fields(product_id = %item.product_id, quantity = item.quantity))]
    pub async fn add_item(&self, id: CartId, item: CartItem) -> Result<CartSummary, CartError> {
        self.act(id, CartAction::AddItem(item)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, product_id: &str) -> Result<CartSummary, CartError> {
        self.act(
            id,
            CartAction::RemoveItem {
                product_id: product_id.to_string(),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<CartSummary, CartError> {
        self.act(id, CartAction::Clear).await
    }

    #[instrument(skip(self))]
    pub async fn notify(&self, id: CartId, message: String) -> Result<CartSummary, CartError> {
        self.act(id, CartAction::Notify(message)).await
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, id: CartId) -> Result<CartSummary, CartError> {
        self.act(id, CartAction::Summary).await
    }

    /// Snapshot-and-empty in a single cart request, for placing an order.
    #[instrument(skip(self))]
    pub async fn take_for_order(&self, id: CartId, order_id: &str) -> Result<CartSummary, CartError> {
        self.act(
            id,
            CartAction::TakeForOrder {
                order_id: order_id.to_string(),
            },
        )
        .await
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartSummary, CartError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CartError {
        if let Some(cart_error) = e.entity_error::<CartError>() {
            return cart_error.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_add_item_sends_add_action() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move {
            carts.add_item(CartId(1), CartItem::new("p1", "Egusi", 2500, 2)).await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::AddItem(item) => assert_eq!(item.quantity, 2),
            other => panic!("Expected AddItem, got {other:?}"),
        }

        let mut cart = Cart::new(CartId(1), "user_1");
        cart.items.push(CartItem::new("p1", "Egusi", 2500, 2));
        responder.send(Ok(cart.summary())).unwrap();

        let summary = task.await.unwrap().unwrap();
        assert_eq!(summary.total_price, 5000);
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1)).return_err(FrameworkError::EntityError(Box::new(
            CartError::ItemNotInCart("p7".into()),
        )));
        let carts = CartClient::new(mock.client());

        let err = carts.remove_item(CartId(1), "p7").await.unwrap_err();
        assert_eq!(err, CartError::ItemNotInCart("p7".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_cart_maps_to_not_found() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(9))
            .return_err(FrameworkError::NotFound("cart_9".into()));
        let carts = CartClient::new(mock.client());

        let err = carts.summary(CartId(9)).await.unwrap_err();
        assert_eq!(err, CartError::NotFound("cart_9".into()));
        mock.verify();
    }
}
