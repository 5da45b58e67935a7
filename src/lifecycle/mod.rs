//! Runtime wiring: configuration, logging, and the actor system.
//!
//! - [`CheckoutConfig`] - settings read from the environment
//! - [`setup_tracing`] - installs the log subscriber
//! - [`MarketSystem`] - starts, wires and stops the cart and order actors

pub mod config;
pub mod market_system;
pub mod tracing;

pub use config::*;
pub use market_system::*;
pub use self::tracing::setup_tracing;
