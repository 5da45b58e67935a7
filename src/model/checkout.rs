//! Payloads exchanged between checkout steps.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The four screens of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CheckoutStep {
    Cart = 0,
    Delivery = 1,
    Payment = 2,
    Tracking = 3,
}

impl CheckoutStep {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Delivery => "Delivery",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Tracking => "Tracking",
        }
    }
}

impl Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// How the order reaches the customer.
///
/// Values arrive as strings from the storefront, so an unrecognized method is
/// kept as [`DeliveryMethod::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryMethod {
    #[default]
    SelfPickup,
    VendorDelivery,
    /// Listed in the form but not selectable.
    Express,
    Other(String),
}

impl DeliveryMethod {
    /// The options the delivery form lists, in display order.
    pub const OPTIONS: [DeliveryMethod; 3] = [
        DeliveryMethod::SelfPickup,
        DeliveryMethod::VendorDelivery,
        DeliveryMethod::Express,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DeliveryMethod::SelfPickup => "self-pickup",
            DeliveryMethod::VendorDelivery => "vendor-delivery",
            DeliveryMethod::Express => "express",
            DeliveryMethod::Other(raw) => raw,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, DeliveryMethod::SelfPickup | DeliveryMethod::VendorDelivery)
    }
}

impl From<&str> for DeliveryMethod {
    fn from(raw: &str) -> Self {
        match raw {
            "self-pickup" => DeliveryMethod::SelfPickup,
            "vendor-delivery" => DeliveryMethod::VendorDelivery,
            "express" => DeliveryMethod::Express,
            other => DeliveryMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for DeliveryMethod {
    fn from(raw: String) -> Self {
        DeliveryMethod::from(raw.as_str())
    }
}

impl From<DeliveryMethod> for String {
    fn from(method: DeliveryMethod) -> Self {
        match method {
            DeliveryMethod::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the customer settles the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Confirm and pay over a WhatsApp conversation with the vendor.
    #[default]
    Whatsapp,
    /// Pay on delivery.
    Pod,
    /// Placeholder, shown disabled.
    Wallet,
}

impl PaymentMethod {
    pub const OPTIONS: [PaymentMethod; 3] =
        [PaymentMethod::Whatsapp, PaymentMethod::Pod, PaymentMethod::Wallet];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Whatsapp => "whatsapp",
            PaymentMethod::Pod => "pod",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(self, PaymentMethod::Wallet)
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "whatsapp" => Ok(PaymentMethod::Whatsapp),
            "pod" => Ok(PaymentMethod::Pod),
            "wallet" => Ok(PaymentMethod::Wallet),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

/// Fields of the shipping-address subform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub delivery_instructions: String,
}

/// Everything the delivery step reports to the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryData {
    #[serde(flatten)]
    pub shipping: ShippingDetails,
    pub delivery_method: DeliveryMethod,
}

/// What the payment step reports to the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_and_title() {
        assert_eq!(CheckoutStep::Cart.index(), 0);
        assert_eq!(CheckoutStep::Payment.index(), 2);
        assert_eq!(CheckoutStep::Tracking.to_string(), "Tracking");
    }

    #[test]
    fn test_delivery_method_keeps_unknown_values() {
        assert_eq!(DeliveryMethod::from("vendor-delivery"), DeliveryMethod::VendorDelivery);
        let other = DeliveryMethod::from("drone");
        assert_eq!(other, DeliveryMethod::Other("drone".into()));
        assert_eq!(other.to_string(), "drone");
        assert!(!other.is_enabled());
        assert!(!DeliveryMethod::Express.is_enabled());
    }

    #[test]
    fn test_defaults_match_a_fresh_checkout() {
        let delivery = DeliveryData::default();
        assert_eq!(delivery.delivery_method, DeliveryMethod::SelfPickup);
        assert_eq!(PaymentData::default().payment_method, PaymentMethod::Whatsapp);
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("pod".parse::<PaymentMethod>(), Ok(PaymentMethod::Pod));
        assert!("card".parse::<PaymentMethod>().is_err());
        assert!(!PaymentMethod::Wallet.is_enabled());
    }
}
