//! Demo: one customer checks out a cart with vendor delivery and WhatsApp
//! payment, then watches the simulated tracking run to the end.
//!
//! ```bash
//! RUST_LOG=info CHECKOUT_TRACKING_TICK_MS=500 cargo run
//! ```

use checkout_flow::checkout::{CheckoutController, CheckoutView};
use checkout_flow::lifecycle::{setup_tracing, CheckoutConfig, MarketSystem};
use checkout_flow::model::{
    CartItem, DeliveryMethod, PaymentMethod, Session, ShippingDetails, User,
};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CheckoutConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting checkout demo");

    let system = MarketSystem::new(&config);

    let cart_id = async {
        let carts = &system.cart_client;
        let cart_id = carts.create_cart("user_1").await?;
        carts
            .add_item(cart_id, CartItem::new("jollof", "Jollof rice", 1500, 2))
            .await?;
        carts
            .add_item(cart_id, CartItem::new("suya", "Beef suya", 2000, 1))
            .await?;
        Ok::<_, checkout_flow::cart_actor::CartError>(cart_id)
    }
    .instrument(tracing::info_span!("shopping"))
    .await
    .map_err(|e| e.to_string())?;

    let session = Session::signed_in(User::new("user_1", "Ada", "ada@example.com"));
    let mut checkout = CheckoutController::new(system.storefront(cart_id), session, &config);

    let span = tracing::info_span!("checkout", %cart_id);
    async {
        if let Some(navigation) = checkout.mount().await {
            warn!(?navigation, "Nothing to check out");
            return Ok(());
        }
        if let CheckoutView::Cart(cart) = checkout.view() {
            info!(items = cart.total_items, subtotal = cart.total_price, "Reviewing cart");
        }
        checkout.proceed_to_delivery().map_err(|e| e.to_string())?;

        if let Some(form) = checkout.delivery_form_mut() {
            form.select_method(DeliveryMethod::VendorDelivery)
                .map_err(|e| e.to_string())?;
        }
        checkout
            .submit_delivery(ShippingDetails {
                first_name: "Ada".into(),
                last_name: "Obi".into(),
                email: "ada@example.com".into(),
                phone: "+2348000000000".into(),
                address: "12 Marina Road".into(),
                city: "Lagos".into(),
                state: "Lagos".into(),
                zip_code: "101001".into(),
                country: "Nigeria".into(),
                delivery_instructions: "Gate 2".into(),
            })
            .map_err(|e| e.to_string())?;

        if let Some(form) = checkout.payment_form_mut() {
            form.select_method(PaymentMethod::Whatsapp)
                .map_err(|e| e.to_string())?;
            info!(
                subtotal = form.cart_subtotal(),
                fee = form.delivery_fee(),
                total = form.total(),
                "Payment summary"
            );
        }
        checkout.submit_payment().await.map_err(|e| e.to_string())?;

        if let Some(tracking) = checkout.tracking() {
            info!(order_id = tracking.order_id(), "Tracking order");
            let mut progress = tracking.subscribe();
            loop {
                let active = *progress.borrow_and_update();
                let step = tracking.steps()[active];
                info!(step, status = tracking.status_line(), "Delivery progress");
                if progress.changed().await.is_err() {
                    break;
                }
            }
        }

        let navigation = checkout.continue_shopping().map_err(|e| e.to_string())?;
        info!(?navigation, "Checkout finished");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    drop(checkout);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
