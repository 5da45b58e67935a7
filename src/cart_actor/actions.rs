//! Custom actions for the Cart actor.
//!
//! Every action answers with the cart's [`CartSummary`] after it has been
//! applied, which is what the storefront re-renders from.

use crate::model::CartItem;

/// Operations on a [`Cart`](crate::model::Cart) beyond CRUD.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a line, or bumps the quantity of an existing line for the same product.
    AddItem(CartItem),
    /// Drops the line for a product.
    RemoveItem { product_id: String },
    /// Empties the cart. Used once an order has been placed.
    Clear,
    /// Appends a customer-facing notification.
    Notify(String),
    /// Read-only snapshot.
    Summary,
    /// Hands the cart over to an order in one step: answers with the lines as
    /// they were, then empties the cart and posts "Order <id> placed". An
    /// empty cart is left untouched.
    TakeForOrder { order_id: String },
}
