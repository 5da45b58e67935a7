//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level comes from `RUST_LOG`.
//!
//! ```bash
//! # Step changes, orders placed, actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Also request payloads and every tracking tick
//! RUST_LOG=debug cargo run
//!
//! # Only the checkout workflow
//! RUST_LOG=checkout_flow::checkout=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a full checkout reads roughly like this:
//!
//! ```text
//! INFO Actor started entity_type="Cart"
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! INFO mount: Cart loaded items=3 total=5000
//! INFO Checkout step changed from=Cart step=Delivery
//! INFO Checkout step changed from=Delivery step=Payment
//! INFO handle_payment_submit{payment_method=whatsapp}: Order placed order_id="order_1"
//! INFO handle_payment_submit{payment_method=whatsapp}: Tracking started order_id=order_1 total=5000
//! ```
//!
//! Actor logs carry `entity_type` instead of a module path, so the target is
//! hidden.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
