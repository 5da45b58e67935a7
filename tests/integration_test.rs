use checkout_flow::checkout::{
    CartService, CheckoutController, CheckoutError, CheckoutView, Navigation,
};
use checkout_flow::lifecycle::{CheckoutConfig, MarketSystem};
use checkout_flow::model::{
    CartItem, CheckoutStep, DeliveryData, DeliveryMethod, PaymentMethod, Session, ShippingDetails,
    User,
};
use checkout_flow::order_actor::OrderError;

fn shopper() -> Session {
    Session::signed_in(User::new("user_1", "Ada", "ada@example.com"))
}

fn address() -> ShippingDetails {
    ShippingDetails {
        first_name: "Ada".into(),
        last_name: "Obi".into(),
        email: "ada@example.com".into(),
        phone: "+2348000000000".into(),
        address: "12 Marina Road".into(),
        city: "Lagos".into(),
        state: "Lagos".into(),
        zip_code: "101001".into(),
        country: "Nigeria".into(),
        delivery_instructions: String::new(),
    }
}

/// Full checkout against the real cart and order actors: a 5000 cart with
/// vendor delivery and WhatsApp payment.
#[tokio::test(start_paused = true)]
async fn test_full_checkout_with_vendor_delivery() {
    let config = CheckoutConfig::default();
    let system = MarketSystem::new(&config);

    let cart_id = system.cart_client.create_cart("user_1").await.unwrap();
    system
        .cart_client
        .add_item(cart_id, CartItem::new("jollof", "Jollof rice", 1500, 2))
        .await
        .unwrap();
    system
        .cart_client
        .add_item(cart_id, CartItem::new("suya", "Beef suya", 2000, 1))
        .await
        .unwrap();

    let mut checkout = CheckoutController::new(system.storefront(cart_id), shopper(), &config);
    assert_eq!(checkout.mount().await, None);
    match checkout.view() {
        CheckoutView::Cart(cart) => {
            assert_eq!(cart.total_price, 5000);
            assert_eq!(cart.total_items, 3);
        }
        other => panic!("Expected cart review, got {other:?}"),
    }

    checkout.proceed_to_delivery().unwrap();
    checkout
        .delivery_form_mut()
        .unwrap()
        .select_method(DeliveryMethod::VendorDelivery)
        .unwrap();
    checkout.submit_delivery(address()).unwrap();

    let form = checkout.payment_form_mut().unwrap();
    assert_eq!(form.payment_method(), PaymentMethod::Whatsapp);
    assert_eq!(form.total(), 7000);

    checkout.submit_payment().await.unwrap();
    assert_eq!(checkout.current_step(), CheckoutStep::Tracking);
    assert_eq!(checkout.checkout_error(), None);

    let order = checkout.order_details().unwrap();
    assert_eq!(order.order_id, "order_1");
    assert_eq!(order.total_price, 5000);
    assert_eq!(order.items.len(), 2);

    let tracking = checkout.tracking().unwrap();
    assert_eq!(tracking.total(), 5000);
    assert_eq!(tracking.delivery_method(), &DeliveryMethod::VendorDelivery);
    assert_eq!(tracking.steps().len(), 3);
    assert_eq!(tracking.active_step(), "Order Confirmed");
    assert!(tracking.wait_until_complete().await);
    assert_eq!(tracking.active_step(), "Out for Delivery");

    // Placing the order emptied the cart and left a note on it.
    let cart = system.cart_client.summary(cart_id).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.notifications.last().unwrap(), "Order order_1 placed");

    let receipt = system
        .order_client
        .receipt(checkout_flow::model::OrderId(1))
        .await
        .unwrap();
    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["order_id"], "order_1");
    assert_eq!(json["payment_method"], "whatsapp");
    assert_eq!(json["total_price"], 5000);
    assert_eq!(json["status"], "placed");

    assert_eq!(checkout.continue_shopping(), Ok(Navigation::Home("/".into())));
    assert_eq!(checkout.current_step(), CheckoutStep::Cart);

    // Landing on checkout again shows the emptied cart and sends the customer home.
    assert_eq!(checkout.mount().await, Some(Navigation::Home("/".into())));
    match checkout.view() {
        CheckoutView::Cart(cart) => assert_eq!(cart.total_items, 0),
        other => panic!("Expected cart review, got {other:?}"),
    }
    assert_eq!(checkout.proceed_to_delivery(), Err(CheckoutError::EmptyCart));

    drop(checkout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_returning_to_checkout_after_ordering_redirects_home() {
    let config = CheckoutConfig::default();
    let system = MarketSystem::new(&config);
    let cart_id = system.cart_client.create_cart("user_1").await.unwrap();
    system
        .cart_client
        .add_item(cart_id, CartItem::new("garri", "Garri", 800, 1))
        .await
        .unwrap();

    let storefront = system.storefront(cart_id);
    storefront.checkout(PaymentMethod::Pod).await.unwrap();

    let mut checkout = CheckoutController::new(storefront, shopper(), &config);
    assert_eq!(checkout.mount().await, Some(Navigation::Home("/".into())));

    drop(checkout);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_of_empty_cart_is_rejected() {
    let system = MarketSystem::new(&CheckoutConfig::default());
    let cart_id = system.cart_client.create_cart("user_2").await.unwrap();

    let storefront = system.storefront(cart_id);
    let err = storefront.checkout(PaymentMethod::Whatsapp).await.unwrap_err();
    assert_eq!(err, CheckoutError::Order(OrderError::EmptyCart("cart_1".into())));
    assert_eq!(err.user_message(), "Cart cart_1 is empty");

    drop(storefront);
    system.shutdown().await.unwrap();
}

#[test]
fn test_delivery_payload_is_flat_camel_case() {
    let data = DeliveryData {
        shipping: address(),
        delivery_method: DeliveryMethod::VendorDelivery,
    };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["zipCode"], "101001");
    assert_eq!(json["deliveryMethod"], "vendor-delivery");

    let parsed: DeliveryData = serde_json::from_value(serde_json::json!({
        "firstName": "Ada", "lastName": "Obi", "email": "ada@example.com",
        "phone": "1", "address": "a", "city": "c", "state": "s",
        "zipCode": "z", "country": "NG", "deliveryInstructions": "",
        "deliveryMethod": "drone"
    }))
    .unwrap();
    assert_eq!(parsed.delivery_method, DeliveryMethod::Other("drone".into()));
}
