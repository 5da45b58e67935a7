//! # Order Client
//!
//! High-level API over the Order actor. Cart validation and clearing happen
//! inside the actor's `on_create` hook, not here.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderResult};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        info!("Sending place_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches the stored order in the shape the storefront returns.
    #[instrument(skip(self))]
    pub async fn receipt(&self, id: OrderId) -> Result<OrderResult, OrderError> {
        debug!("Sending request");
        self.get(id)
            .await?
            .map(|order| order.to_result())
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        if let Some(order_error) = e.entity_error::<OrderError>() {
            return order_error.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
