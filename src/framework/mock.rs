//! # Mock Framework
//!
//! Test doubles for the actor plumbing, so a typed client can be exercised
//! without spawning the real [`ResourceActor`](super::ResourceActor).
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue canned replies up front, run the code under test,
//!   then call [`MockClient::verify`].
//! - [`create_mock_client`] plus [`expect_create`], [`expect_get`],
//!   [`expect_update`] and [`expect_action`]: receive each request by hand,
//!   inspect its payload and answer through its responder.
//!
//! ```ignore
//! let mut mock = MockClient::<Cart>::new();
//! mock.expect_action(CartId(1)).return_ok(CartSummary::default());
//!
//! let carts = CartClient::new(mock.client());
//! let summary = carts.summary(CartId(1)).await?;
//! mock.verify();
//! ```

use super::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

enum Reply<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Reply<T> {
    fn kind(&self) -> &'static str {
        match self {
            Reply::Create(_) => "Create",
            Reply::Get(_) => "Get",
            Reply::Update(_) => "Update",
            Reply::Delete(_) => "Delete",
            Reply::Action(_) => "Action",
        }
    }
}

/// A queued reply, optionally bound to the id the request must target.
struct Expectation<T: ActorEntity> {
    id: Option<T::Id>,
    reply: Reply<T>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;
type Failures = Arc<Mutex<Vec<String>>>;

fn lock<X>(mutex: &Mutex<X>) -> MutexGuard<'_, X> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

/// Answers one request from the next expectation. Anything unexpected is
/// recorded for [`MockClient::verify`] and its responder dropped, which the
/// caller sees as [`FrameworkError::ActorDropped`].
fn serve<T: ActorEntity>(
    request: ResourceRequest<T>,
    next: Option<Expectation<T>>,
    failures: &Failures,
) {
    let Some(Expectation { id: expected, reply }) = next else {
        lock(failures).push(format!("unexpected {} request", request_kind(&request)));
        return;
    };

    let check = |actual: &T::Id| {
        if let Some(expected) = &expected {
            if expected != actual {
                lock(failures).push(format!("expected request for {expected}, got {actual}"));
            }
        }
    };

    match (request, reply) {
        (ResourceRequest::Create { respond_to, .. }, Reply::Create(response)) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, Reply::Get(response)) => {
            check(&id);
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Update { id, respond_to, .. }, Reply::Update(response)) => {
            check(&id);
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Delete { id, respond_to }, Reply::Delete(response)) => {
            check(&id);
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Action { id, respond_to, .. }, Reply::Action(response)) => {
            check(&id);
            let _ = respond_to.send(response);
        }
        (request, reply) => {
            lock(failures).push(format!(
                "expected {} request, got {}",
                reply.kind(),
                request_kind(&request)
            ));
        }
    }
}

/// A [`ResourceClient`] backed by a queue of canned replies.
///
/// Replies are consumed in the order they were queued, one per request.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Failures,
    _server: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(64);
        let expectations: Queue<T> = Arc::default();
        let failures: Failures = Arc::default();

        let server = tokio::spawn({
            let expectations = Arc::clone(&expectations);
            let failures = Arc::clone(&failures);
            async move {
                while let Some(request) = receiver.recv().await {
                    let next = lock(&expectations).pop_front();
                    serve(request, next, &failures);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _server: server,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> Respond<T, T::Id> {
        self.respond(None, Reply::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> Respond<T, Option<T>> {
        self.respond(Some(id), Reply::Get)
    }

    pub fn expect_update(&mut self, id: T::Id) -> Respond<T, T> {
        self.respond(Some(id), Reply::Update)
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Respond<T, ()> {
        self.respond(Some(id), Reply::Delete)
    }

    pub fn expect_action(&mut self, id: T::Id) -> Respond<T, T::ActionResult> {
        self.respond(Some(id), Reply::Action)
    }

    fn respond<R>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    ) -> Respond<T, R> {
        Respond {
            expectations: Arc::clone(&self.expectations),
            id,
            wrap,
        }
    }

    /// Panics if a queued reply was never requested or a request did not
    /// match what was queued.
    pub fn verify(&self) {
        let failures = lock(&self.failures);
        if !failures.is_empty() {
            panic!("Mock received unexpected requests: {}", failures.join("; "));
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes an expectation started on [`MockClient`].
pub struct Respond<T: ActorEntity, R> {
    expectations: Queue<T>,
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
}

impl<T: ActorEntity, R> Respond<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let reply = (self.wrap)(response);
        lock(&self.expectations).push_back(Expectation { id: self.id, reply });
    }
}

/// A client whose requests arrive on the returned receiver instead of an actor.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::CartAction;
    use crate::model::{Cart, CartCreate, CartId, CartSummary};

    #[tokio::test]
    async fn test_hand_answered_requests() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let task = tokio::spawn(async move {
            client
                .create(CartCreate {
                    owner: "user_1".into(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.owner, "user_1");
        responder.send(Ok(CartId(1))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), CartId(1));
    }

    #[tokio::test]
    async fn test_update_request_carries_id() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let task = tokio::spawn(async move { client.update(CartId(2), ()).await });

        let (id, (), responder) = expect_update(&mut receiver).await.unwrap();
        assert_eq!(id, CartId(2));
        responder.send(Ok(Cart::new(CartId(2), "user_1"))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().id, CartId(2));
    }

    #[tokio::test]
    async fn test_queued_replies_are_served_in_order() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_create().return_ok(CartId(1));
        mock.expect_get(CartId(1)).return_ok(Some(Cart::new(CartId(1), "user_1")));
        mock.expect_action(CartId(1)).return_ok(CartSummary::default());
        mock.expect_delete(CartId(1)).return_ok(());

        let client = mock.client();
        let id = client
            .create(CartCreate {
                owner: "user_1".into(),
            })
            .await
            .unwrap();
        let cart = client.get(id).await.unwrap().unwrap();
        assert_eq!(cart.owner, "user_1");
        let summary = client.perform_action(id, CartAction::Summary).await.unwrap();
        assert!(summary.is_empty());
        client.delete(id).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expected request for cart_1, got cart_2")]
    async fn test_wrong_id_fails_verify() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get(CartId(1)).return_ok(None);

        let _ = mock.client().get(CartId(2)).await;
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_dropped() {
        let mock = MockClient::<Cart>::new();

        let err = mock.client().get(CartId(1)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorDropped));
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_unmet_expectation_fails_verify() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_create().return_ok(CartId(1));
        mock.verify();
    }
}
