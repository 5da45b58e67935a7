//! # Checkout Workflow
//!
//! The four-step checkout wizard: review the cart, enter delivery details,
//! pay, then watch the (simulated) delivery progress.
//!
//! - [`controller`]: [`CheckoutController`], the session state machine
//! - [`delivery`]: [`DeliveryForm`]
//! - [`payment`]: [`PaymentForm`] and the delivery fee table
//! - [`tracking`]: [`OrderTracking`]
//! - [`service`]: the [`CartService`] seam to the storefront
//! - [`error`]: [`CheckoutError`], [`FormError`]

pub mod controller;
pub mod delivery;
pub mod error;
pub mod payment;
pub mod service;
pub mod tracking;

pub use controller::{CheckoutController, CheckoutView, Navigation};
pub use delivery::DeliveryForm;
pub use error::*;
pub use payment::{delivery_fee, PaymentForm, SubmitGuard};
pub use service::CartService;
pub use tracking::OrderTracking;
