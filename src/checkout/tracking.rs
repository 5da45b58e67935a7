//! Tracking step: simulated delivery progress.
//!
//! Nothing here talks to a backend. A spawned timer moves the active step
//! forward once per tick and stops at the last one.

use crate::model::{Amount, DeliveryMethod};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub const SELF_PICKUP_STEPS: &[&str] = &["Order Confirmed", "Preparing Order", "Ready for Pickup"];

pub const VENDOR_DELIVERY_STEPS: &[&str] =
    &["Order Confirmed", "Vendor Processing", "Out for Delivery"];

/// Rider dispatch, used for every method without a sequence of its own.
pub const RIDER_STEPS: &[&str] = &[
    "Order Confirmed",
    "Rider Assigned",
    "Out for Delivery",
    "Delivered",
];

const STATUS_LINES: &[(&str, &str)] = &[
    ("Order Confirmed", "Your order has been received and confirmed."),
    ("Preparing Order", "The vendor is preparing your order."),
    ("Ready for Pickup", "Your order is ready for pickup at the vendor's location."),
    ("Vendor Processing", "The vendor is processing your order for delivery."),
    ("Rider Assigned", "A rider has been assigned to your order."),
    ("Out for Delivery", "Your order is on its way."),
    ("Delivered", "Your order has been delivered. Enjoy!"),
];

pub fn steps_for(method: &DeliveryMethod) -> &'static [&'static str] {
    match method {
        DeliveryMethod::SelfPickup => SELF_PICKUP_STEPS,
        DeliveryMethod::VendorDelivery => VENDOR_DELIVERY_STEPS,
        _ => RIDER_STEPS,
    }
}

/// Human-readable line for a step label.
pub fn status_line(label: &str) -> Option<&'static str> {
    STATUS_LINES
        .iter()
        .find(|(step, _)| *step == label)
        .map(|&(_, line)| line)
}

/// Progress display for a placed order.
///
/// The timer task is aborted when the tracker is stopped or dropped.
#[derive(Debug)]
pub struct OrderTracking {
    order_id: String,
    total: Amount,
    delivery_method: DeliveryMethod,
    steps: &'static [&'static str],
    progress: watch::Receiver<usize>,
    timer: JoinHandle<()>,
}

impl OrderTracking {
    /// Starts tracking at the first step. Must be called inside a tokio runtime.
    pub fn start(
        order_id: String,
        total: Amount,
        delivery_method: DeliveryMethod,
        tick: Duration,
    ) -> Self {
        let steps = steps_for(&delivery_method);
        let last = steps.len() - 1;
        let (tx, progress) = watch::channel(0usize);

        let timer = tokio::spawn({
            let order_id = order_id.clone();
            async move {
                let mut active = 0;
                while active < last {
                    tokio::time::sleep(tick).await;
                    active += 1;
                    debug!(%order_id, step = steps[active], "Tracking advanced");
                    if tx.send(active).is_err() {
                        break;
                    }
                }
            }
        });

        info!(%order_id, total, %delivery_method, steps = steps.len(), "Tracking started");
        Self {
            order_id,
            total,
            delivery_method,
            steps,
            progress,
            timer,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn delivery_method(&self) -> &DeliveryMethod {
        &self.delivery_method
    }

    pub fn steps(&self) -> &'static [&'static str] {
        self.steps
    }

    pub fn active_index(&self) -> usize {
        *self.progress.borrow()
    }

    pub fn active_step(&self) -> &'static str {
        self.steps[self.active_index()]
    }

    /// Status line for the active step. Every built-in label has one.
    pub fn status_line(&self) -> &'static str {
        status_line(self.active_step()).unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.active_index() + 1 == self.steps.len()
    }

    /// Receives the active step index on every advance. The channel closes
    /// once the last step is reached or the timer is cancelled.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.progress.clone()
    }

    /// Resolves once the last step is active. Returns `false` if the timer
    /// was cancelled first.
    pub async fn wait_until_complete(&self) -> bool {
        let last = self.steps.len() - 1;
        let mut progress = self.progress.clone();
        let reached = progress.wait_for(|active| *active == last).await.is_ok();
        reached
    }

    /// Cancels the timer, freezing progress on the current step.
    pub fn stop(&self) {
        if !self.timer.is_finished() {
            debug!(order_id = %self.order_id, step = self.active_step(), "Tracking stopped");
        }
        self.timer.abort();
    }
}

impl Drop for OrderTracking {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
