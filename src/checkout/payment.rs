//! Payment step: choose how to pay, see the fee-inclusive total, place the order.

use super::error::{CheckoutError, FormError};
use crate::model::{Amount, DeliveryMethod, PaymentData, PaymentMethod};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Delivery fee for a delivery method.
///
/// Unrecognized methods cost nothing rather than failing the render.
pub fn delivery_fee(method: &DeliveryMethod) -> Amount {
    match method {
        DeliveryMethod::SelfPickup => 0,
        DeliveryMethod::VendorDelivery => 2000,
        DeliveryMethod::Express => 1500,
        DeliveryMethod::Other(_) => 0,
    }
}

/// Local state of the payment step.
///
/// Fee and total are derived from the delivery method and cart subtotal on
/// every call; nothing about pricing is stored.
#[derive(Debug)]
pub struct PaymentForm {
    payment_method: PaymentMethod,
    delivery_method: DeliveryMethod,
    cart_subtotal: Amount,
    error: Option<String>,
    submitting: Arc<watch::Sender<bool>>,
}

impl PaymentForm {
    pub fn new(initial: PaymentData, delivery_method: DeliveryMethod, cart_subtotal: Amount) -> Self {
        let (submitting, _) = watch::channel(false);
        Self {
            payment_method: initial.payment_method,
            delivery_method,
            cart_subtotal,
            error: None,
            submitting: Arc::new(submitting),
        }
    }

    /// Every listed option and whether it can be chosen.
    pub fn options() -> impl Iterator<Item = (PaymentMethod, bool)> {
        PaymentMethod::OPTIONS
            .into_iter()
            .map(|method| (method, method.is_enabled()))
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), FormError> {
        if !method.is_enabled() {
            return Err(FormError::OptionUnavailable(method.to_string()));
        }
        self.payment_method = method;
        Ok(())
    }

    pub fn cart_subtotal(&self) -> Amount {
        self.cart_subtotal
    }

    pub fn delivery_fee(&self) -> Amount {
        delivery_fee(&self.delivery_method)
    }

    pub fn total(&self) -> Amount {
        self.cart_subtotal.saturating_add(self.delivery_fee())
    }

    /// Error from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit button should be disabled right now.
    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    /// Follows the submitting flag, e.g. from a renderer task.
    pub fn subscribe_submitting(&self) -> watch::Receiver<bool> {
        self.submitting.subscribe()
    }

    /// Starts a submission: raises the submitting flag and clears the previous
    /// error. The flag drops again when the returned guard is dropped.
    pub fn begin_submit(&mut self) -> (PaymentData, SubmitGuard) {
        self.error = None;
        self.submitting.send_replace(true);
        debug!(payment_method = %self.payment_method, "Payment submit started");
        let data = PaymentData {
            payment_method: self.payment_method,
        };
        let guard = SubmitGuard {
            flag: Arc::clone(&self.submitting),
        };
        (data, guard)
    }

    /// Records the outcome of a submission started with [`begin_submit`](Self::begin_submit).
    pub fn finish_submit<T>(&mut self, outcome: &Result<T, CheckoutError>, guard: SubmitGuard) {
        if let Err(e) = outcome {
            let message = e.user_message();
            warn!(error = %message, "Payment submit failed");
            self.error = Some(message);
        }
        drop(guard);
    }

    /// Hands the form data to `on_submit` and records the outcome.
    pub async fn submit<F, Fut, T>(&mut self, on_submit: F) -> Result<T, CheckoutError>
    where
        F: FnOnce(PaymentData) -> Fut,
        Fut: Future<Output = Result<T, CheckoutError>>,
    {
        let (data, guard) = self.begin_submit();
        let outcome = on_submit(data).await;
        self.finish_submit(&outcome, guard);
        outcome
    }
}

/// Keeps the submitting flag raised while alive.
///
/// Dropping it, including when the submit future is cancelled, lowers the flag.
#[derive(Debug)]
pub struct SubmitGuard {
    flag: Arc<watch::Sender<bool>>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}
