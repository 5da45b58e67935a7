//! # Checkout Controller
//!
//! Owns the checkout session: which step is showing, the data each step has
//! handed up, and the placed order. Step forms report upward only through the
//! `handle_*` methods; nothing else mutates the session.
//!
//! ```text
//! Cart ──proceed──▶ Delivery ──submit──▶ Payment ──checkout ok──▶ Tracking
//!  ▲                  │  ▲                  │                        │
//!  └──────back────────┘  └──────back────────┘    continue shopping ──┘ (home)
//! ```

use super::delivery::DeliveryForm;
use super::error::CheckoutError;
use super::payment::PaymentForm;
use super::service::CartService;
use super::tracking::OrderTracking;
use crate::lifecycle::CheckoutConfig;
use crate::model::{
    CartSummary, CheckoutStep, DeliveryData, OrderResult, PaymentData, Session, ShippingDetails,
};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Where the host should send the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home(String),
    HistoryBack,
}

/// What to render right now. Exactly one step is shown at a time.
#[derive(Debug)]
pub enum CheckoutView<'a> {
    LoginRequired,
    Cart(&'a CartSummary),
    Delivery(&'a DeliveryForm),
    Payment(&'a PaymentForm),
    Tracking(&'a OrderTracking),
}

/// Step-local state. Leaving a step drops its form, or cancels its timer.
#[derive(Debug)]
enum Stage {
    Cart,
    Delivery(DeliveryForm),
    Payment(PaymentForm),
    Tracking(OrderTracking),
}

impl Stage {
    fn step(&self) -> CheckoutStep {
        match self {
            Stage::Cart => CheckoutStep::Cart,
            Stage::Delivery(_) => CheckoutStep::Delivery,
            Stage::Payment(_) => CheckoutStep::Payment,
            Stage::Tracking(_) => CheckoutStep::Tracking,
        }
    }
}

pub struct CheckoutController<S: CartService> {
    service: S,
    session: Session,
    tracking_tick: Duration,
    home_route: String,
    stage: Stage,
    cart: CartSummary,
    cart_fetched: bool,
    delivery_data: DeliveryData,
    payment_data: PaymentData,
    order_details: Option<OrderResult>,
    checkout_error: Option<String>,
}

impl<S: CartService> CheckoutController<S> {
    pub fn new(service: S, session: Session, config: &CheckoutConfig) -> Self {
        Self {
            service,
            session,
            tracking_tick: config.tracking_tick,
            home_route: config.home_route.clone(),
            stage: Stage::Cart,
            cart: CartSummary::loading(),
            cart_fetched: false,
            delivery_data: DeliveryData::default(),
            payment_data: PaymentData::default(),
            order_details: None,
            checkout_error: None,
        }
    }

    /// Loads the cart the first time a signed-in customer lands on checkout.
    ///
    /// Returns a redirect home when the cart turns out to be empty. An
    /// anonymous session gets the login prompt and nothing is fetched.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> Option<Navigation> {
        if !self.session.is_logged_in() {
            debug!("No session, showing login prompt");
            return None;
        }
        if !self.cart_fetched {
            self.cart_fetched = true;
            self.cart = match self.service.fetch_cart().await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!(error = %e, "Cart fetch failed, treating cart as empty");
                    CartSummary::default()
                }
            };
            info!(items = self.cart.total_items, total = self.cart.total_price, "Cart loaded");
        }
        self.redirect_if_empty()
    }

    /// Feeds a fresh cart summary in, e.g. after an item was removed elsewhere.
    pub fn cart_updated(&mut self, summary: CartSummary) -> Option<Navigation> {
        self.cart = summary;
        self.redirect_if_empty()
    }

    fn redirect_if_empty(&self) -> Option<Navigation> {
        let on_cart = matches!(self.stage, Stage::Cart);
        if on_cart && !self.cart.is_loading && self.cart.is_empty() {
            info!(route = %self.home_route, "Cart is empty, leaving checkout");
            return Some(Navigation::Home(self.home_route.clone()));
        }
        None
    }

    pub fn view(&self) -> CheckoutView<'_> {
        if !self.session.is_logged_in() {
            return CheckoutView::LoginRequired;
        }
        match &self.stage {
            Stage::Cart => CheckoutView::Cart(&self.cart),
            Stage::Delivery(form) => CheckoutView::Delivery(form),
            Stage::Payment(form) => CheckoutView::Payment(form),
            Stage::Tracking(tracking) => CheckoutView::Tracking(tracking),
        }
    }

    pub fn current_step(&self) -> CheckoutStep {
        self.stage.step()
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        let current = self.current_step();
        if !self.session.is_logged_in() || current != expected {
            return Err(self.step_error(current, expected));
        }
        Ok(())
    }

    fn step_error(&self, current: CheckoutStep, expected: CheckoutStep) -> CheckoutError {
        if !self.session.is_logged_in() {
            return CheckoutError::NotAuthenticated;
        }
        CheckoutError::StepMismatch { current, expected }
    }

    fn enter(&mut self, stage: Stage) {
        let from = self.current_step();
        self.stage = stage;
        let to = self.current_step();
        info!(%from, step = %to, index = to.index(), "Checkout step changed");
    }

    /// The cart review's "proceed" control.
    pub fn proceed_to_delivery(&mut self) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Cart)?;
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.enter(Stage::Delivery(DeliveryForm::new(&self.delivery_data)));
        Ok(())
    }

    pub fn delivery_form_mut(&mut self) -> Option<&mut DeliveryForm> {
        match &mut self.stage {
            Stage::Delivery(form) => Some(form),
            _ => None,
        }
    }

    /// Submits the shipping subform of the showing delivery form.
    pub fn submit_delivery(&mut self, shipping: ShippingDetails) -> Result<(), CheckoutError> {
        let current = self.current_step();
        let data = match &mut self.stage {
            Stage::Delivery(form) => form.submit(shipping)?,
            _ => return Err(self.step_error(current, CheckoutStep::Delivery)),
        };
        self.handle_delivery_submit(data)
    }

    /// Stores the delivery details and moves on to payment.
    pub fn handle_delivery_submit(&mut self, data: DeliveryData) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Delivery)?;
        debug!(?data, "Delivery submitted");
        self.delivery_data = data;
        self.enter(Stage::Payment(self.new_payment_form()));
        Ok(())
    }

    fn new_payment_form(&self) -> PaymentForm {
        PaymentForm::new(
            self.payment_data,
            self.delivery_data.delivery_method.clone(),
            self.cart.total_price,
        )
    }

    pub fn payment_form_mut(&mut self) -> Option<&mut PaymentForm> {
        match &mut self.stage {
            Stage::Payment(form) => Some(form),
            _ => None,
        }
    }

    /// Submits the showing payment form.
    ///
    /// The form's submitting flag stays raised until the checkout call
    /// resolves; a failure is shown on the form as well as on the controller.
    pub async fn submit_payment(&mut self) -> Result<(), CheckoutError> {
        let current = self.current_step();
        let (data, guard) = match &mut self.stage {
            Stage::Payment(form) => form.begin_submit(),
            _ => return Err(self.step_error(current, CheckoutStep::Payment)),
        };
        let outcome = self.handle_payment_submit(data).await;
        if let Stage::Payment(form) = &mut self.stage {
            form.finish_submit(&outcome, guard);
        }
        outcome
    }

    /// Stores the payment choice and places the order.
    ///
    /// On success the order is kept and tracking starts; on failure the error
    /// message is kept and the payment step stays up for another attempt.
    #[instrument(skip(self), fields(payment_method = %data.payment_method))]
    pub async fn handle_payment_submit(&mut self, data: PaymentData) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Payment)?;
        self.payment_data = data;

        match self.service.checkout(data.payment_method).await {
            Ok(order) => {
                info!(order_id = %order.order_id, "Order placed");
                self.checkout_error = None;
                let tracking = OrderTracking::start(
                    order.order_id.clone(),
                    self.cart.total_price,
                    self.delivery_data.delivery_method.clone(),
                    self.tracking_tick,
                );
                self.order_details = Some(order);
                // Placing the order emptied the cart; the next mount refetches it.
                self.cart = CartSummary::default();
                self.cart_fetched = false;
                self.enter(Stage::Tracking(tracking));
                Ok(())
            }
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "Checkout failed");
                self.checkout_error = Some(message);
                Err(e)
            }
        }
    }

    /// One step back, or history-back when already on the cart.
    pub fn handle_back(&mut self) -> Option<Navigation> {
        match self.current_step() {
            CheckoutStep::Cart => return Some(Navigation::HistoryBack),
            CheckoutStep::Delivery => self.enter(Stage::Cart),
            CheckoutStep::Payment => {
                self.enter(Stage::Delivery(DeliveryForm::new(&self.delivery_data)))
            }
            CheckoutStep::Tracking => self.enter(Stage::Payment(self.new_payment_form())),
        }
        None
    }

    /// Leaves the tracking screen: back to step 0 and off to the home route.
    /// Coming back to checkout later refetches the cart, which redirects home
    /// again if nothing was added since.
    pub fn continue_shopping(&mut self) -> Result<Navigation, CheckoutError> {
        self.expect_step(CheckoutStep::Tracking)?;
        self.enter(Stage::Cart);
        Ok(Navigation::Home(self.home_route.clone()))
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cart(&self) -> &CartSummary {
        &self.cart
    }

    pub fn delivery_data(&self) -> &DeliveryData {
        &self.delivery_data
    }

    pub fn payment_data(&self) -> PaymentData {
        self.payment_data
    }

    pub fn order_details(&self) -> Option<&OrderResult> {
        self.order_details.as_ref()
    }

    pub fn checkout_error(&self) -> Option<&str> {
        self.checkout_error.as_deref()
    }

    pub fn tracking(&self) -> Option<&OrderTracking> {
        match &self.stage {
            Stage::Tracking(tracking) => Some(tracking),
            _ => None,
        }
    }
}
