//! Delivery step: pick a delivery method, fill in the shipping address.

use super::error::FormError;
use crate::model::{DeliveryData, DeliveryMethod, ShippingDetails};
use tracing::debug;

/// Local state of the delivery step.
///
/// Choosing a method only touches this form. Nothing reaches the controller
/// until the shipping subform is submitted through [`DeliveryForm::submit`].
#[derive(Debug, Clone)]
pub struct DeliveryForm {
    delivery_method: DeliveryMethod,
    shipping: ShippingDetails,
}

impl DeliveryForm {
    /// Builds the form pre-filled from what the controller last stored, so
    /// going back and forth loses nothing.
    pub fn new(initial: &DeliveryData) -> Self {
        Self {
            delivery_method: initial.delivery_method.clone(),
            shipping: initial.shipping.clone(),
        }
    }

    /// Every listed option and whether it can be chosen.
    pub fn options() -> impl Iterator<Item = (DeliveryMethod, bool)> {
        DeliveryMethod::OPTIONS
            .into_iter()
            .map(|method| {
                let enabled = method.is_enabled();
                (method, enabled)
            })
    }

    pub fn delivery_method(&self) -> &DeliveryMethod {
        &self.delivery_method
    }

    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    pub fn select_method(&mut self, method: DeliveryMethod) -> Result<(), FormError> {
        if !method.is_enabled() {
            return Err(FormError::OptionUnavailable(method.to_string()));
        }
        debug!(%method, "Delivery method selected");
        self.delivery_method = method;
        Ok(())
    }

    /// Validates the shipping subform and merges it with the chosen method.
    pub fn submit(&mut self, shipping: ShippingDetails) -> Result<DeliveryData, FormError> {
        validate_shipping(&shipping)?;
        self.shipping = shipping.clone();
        Ok(DeliveryData {
            shipping,
            delivery_method: self.delivery_method.clone(),
        })
    }
}

/// Required-field checks of the shipping subform. Instructions are optional.
pub fn validate_shipping(shipping: &ShippingDetails) -> Result<(), FormError> {
    let required = [
        ("First name", &shipping.first_name),
        ("Last name", &shipping.last_name),
        ("Email", &shipping.email),
        ("Phone", &shipping.phone),
        ("Address", &shipping.address),
        ("City", &shipping.city),
        ("State", &shipping.state),
        ("ZIP code", &shipping.zip_code),
        ("Country", &shipping.country),
    ];
    if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(FormError::MissingField(field));
    }
    if !shipping.email.contains('@') {
        return Err(FormError::InvalidEmail(shipping.email.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lagos_address() -> ShippingDetails {
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

    #[test]
    fn test_submit_merges_method_into_payload() {
        let mut form = DeliveryForm::new(&DeliveryData::default());
        form.select_method(DeliveryMethod::VendorDelivery).unwrap();

        let data = form.submit(lagos_address()).unwrap();
        assert_eq!(data.delivery_method, DeliveryMethod::VendorDelivery);
        assert_eq!(data.shipping.city, "Lagos");
    }

    #[test]
    fn test_express_cannot_be_selected() {
        let mut form = DeliveryForm::new(&DeliveryData::default());
        let err = form.select_method(DeliveryMethod::Express).unwrap_err();
        assert_eq!(err, FormError::OptionUnavailable("express".into()));
        assert_eq!(form.delivery_method(), &DeliveryMethod::SelfPickup);
    }

    #[test]
    fn test_options_list_express_as_disabled() {
        let options: Vec<_> = DeliveryForm::options().collect();
        assert_eq!(
            options,
            vec![
                (DeliveryMethod::SelfPickup, true),
                (DeliveryMethod::VendorDelivery, true),
                (DeliveryMethod::Express, false),
            ]
        );
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut form = DeliveryForm::new(&DeliveryData::default());
        let mut address = lagos_address();
        address.city = "   ".into();
        assert_eq!(form.submit(address).unwrap_err(), FormError::MissingField("City"));

        let mut address = lagos_address();
        address.email = "ada.example.com".into();
        assert!(matches!(form.submit(address), Err(FormError::InvalidEmail(_))));
    }

    #[test]
    fn test_form_rehydrates_from_stored_data() {
        let stored = DeliveryData {
            shipping: lagos_address(),
            delivery_method: DeliveryMethod::VendorDelivery,
        };
        let form = DeliveryForm::new(&stored);
        assert_eq!(form.delivery_method(), &DeliveryMethod::VendorDelivery);
        assert_eq!(form.shipping(), &stored.shipping);
    }
}
