//! A customer's shopping cart.
//!
//! # Actor Framework
//! Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
//! [`cart_actor`](crate::cart_actor) for the entity implementation and the
//! [`CartAction`](crate::cart_actor::CartAction)s it understands.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Money in whole currency units. Prices in the marketplace carry no minor unit.
pub type Amount = u64;

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One product line in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: Amount,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Amount,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Price times quantity, or `None` when it does not fit in an [`Amount`].
    pub fn line_total(&self) -> Option<Amount> {
        self.unit_price.checked_mul(Amount::from(self.quantity))
    }
}

/// Total quantity and total price of a set of lines, or `None` on overflow.
pub fn cart_totals(items: &[CartItem]) -> Option<(u32, Amount)> {
    items.iter().try_fold((0u32, 0 as Amount), |(count, price), item| {
        Some((
            count.checked_add(item.quantity)?,
            price.checked_add(item.line_total()?)?,
        ))
    })
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub owner: String,
    pub items: Vec<CartItem>,
    pub notifications: Vec<String>,
}

impl Cart {
    pub fn new(id: CartId, owner: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            items: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// The cart actor never stores lines whose totals overflow; a cart built
    /// by hand past that point reports saturated totals.
    pub fn summary(&self) -> CartSummary {
        let (total_items, total_price) = cart_totals(&self.items).unwrap_or((u32::MAX, Amount::MAX));
        CartSummary {
            cart_items: self.items.clone(),
            total_items,
            total_price,
            is_loading: false,
            notifications: self.notifications.clone(),
        }
    }
}

/// Payload for creating a cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub owner: String,
}

/// Read-only view of a cart, as consumed by the checkout workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub cart_items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: Amount,
    pub is_loading: bool,
    pub notifications: Vec<String>,
}

impl CartSummary {
    /// Placeholder shown while the first fetch is in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals_quantities_and_prices() {
        let mut cart = Cart::new(CartId(1), "user_1");
        cart.items.push(CartItem::new("p1", "Yam flour", 1500, 2));
        cart.items.push(CartItem::new("p2", "Palm oil", 2000, 1));

        let summary = cart.summary();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_price, 5000);
        assert!(!summary.is_loading);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_totals_report_overflow() {
        let huge = CartItem::new("p1", "Gold", Amount::MAX, 2);
        assert_eq!(huge.line_total(), None);
        assert_eq!(cart_totals(&[huge]), None);

        let many = vec![
            CartItem::new("p1", "Pepper", 1, u32::MAX),
            CartItem::new("p2", "Salt", 1, 1),
        ];
        assert_eq!(cart_totals(&many), None);
        assert_eq!(cart_totals(&many[..1]), Some((u32::MAX, Amount::from(u32::MAX))));
    }

    #[test]
    fn test_loading_summary_is_empty() {
        let summary = CartSummary::loading();
        assert!(summary.is_loading);
        assert!(summary.is_empty());
        assert_eq!(summary.total_price, 0);
    }

    #[test]
    fn test_cart_id_display() {
        assert_eq!(CartId(4).to_string(), "cart_4");
    }
}
