//! # Checkout Flow
//!
//! The checkout workflow of a multi-vendor food marketplace, with an in-process
//! storefront built from resource-oriented actors.
//!
//! A signed-in customer moves through four steps: review the cart, enter
//! delivery details, choose a payment method and place the order, then watch
//! a simulated delivery progress display.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` message loop and its typed client.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Storefront ([`cart_actor`], [`order_actor`], [`clients`])
//! Carts and orders live in their own actors. Placing an order reads and
//! clears the cart through a [`CartClient`](clients::CartClient) injected as
//! the order actor's context.
//! - **Key items**: [`StorefrontClient`](clients::StorefrontClient), which
//!   serves one cart to checkout as a [`CartService`](checkout::CartService).
//!
//! ### 3. The Workflow ([`checkout`])
//! - [`CheckoutController`](checkout::CheckoutController): step state machine
//!   and session data.
//! - [`DeliveryForm`](checkout::DeliveryForm),
//!   [`PaymentForm`](checkout::PaymentForm),
//!   [`OrderTracking`](checkout::OrderTracking): one per step.
//!
//! ### 4. Wiring ([`lifecycle`])
//! [`CheckoutConfig`](lifecycle::CheckoutConfig) from the environment,
//! [`setup_tracing`](lifecycle::setup_tracing), and
//! [`MarketSystem`](lifecycle::MarketSystem) to start and stop the actors.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info CHECKOUT_TRACKING_TICK_MS=500 cargo run
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
