//! ActorEntity implementation for the [`Cart`] domain type.

use super::actions::CartAction;
use super::error::CartError;
use crate::framework::ActorEntity;
use crate::model::{cart_totals, Cart, CartCreate, CartId, CartItem, CartSummary};
use async_trait::async_trait;

impl Cart {
    /// Merges `item` into the cart. Nothing changes unless the merged cart
    /// still has representable totals.
    fn add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        if item.quantity == 0 {
            return Err(CartError::InvalidQuantity {
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }
        let mut items = self.items.clone();
        let is_new = match items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => match line.quantity.checked_add(item.quantity) {
                Some(quantity) => {
                    line.quantity = quantity;
                    false
                }
                None => return Err(CartError::QuantityOverflow(item.product_id)),
            },
            None => {
                items.push(item.clone());
                true
            }
        };
        if cart_totals(&items).is_none() {
            return Err(CartError::QuantityOverflow(item.product_id));
        }
        if is_new {
            self.notifications.push(format!("{} added to cart", item.name));
        }
        self.items = items;
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartSummary;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.owner))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<CartSummary, CartError> {
        match action {
            CartAction::AddItem(item) => self.add_item(item)?,
            CartAction::RemoveItem { product_id } => {
                let before = self.items.len();
                self.items.retain(|line| line.product_id != product_id);
                if self.items.len() == before {
                    return Err(CartError::ItemNotInCart(product_id));
                }
            }
            CartAction::Clear => self.items.clear(),
            CartAction::Notify(message) => self.notifications.push(message),
            CartAction::Summary => {}
            CartAction::TakeForOrder { order_id } => {
                let taken = self.summary();
                if !taken.is_empty() {
                    self.items.clear();
                    self.notifications.push(format!("Order {order_id} placed"));
                }
                return Ok(taken);
            }
        }
        Ok(self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartItem;

    fn cart() -> Cart {
        Cart::new(CartId(1), "user_1")
    }

    #[tokio::test]
    async fn test_add_item_merges_lines_for_same_product() {
        let mut cart = cart();
        cart.handle_action(CartAction::AddItem(CartItem::new("p1", "Rice", 3000, 1)), &())
            .await
            .unwrap();
        let summary = cart
            .handle_action(CartAction::AddItem(CartItem::new("p1", "Rice", 3000, 2)), &())
            .await
            .unwrap();

        assert_eq!(summary.cart_items.len(), 1);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_price, 9000);
        assert_eq!(summary.notifications, vec!["Rice added to cart".to_string()]);
    }

    #[tokio::test]
    async fn test_add_item_rejects_zero_quantity() {
        let mut cart = cart();
        let err = cart
            .handle_action(CartAction::AddItem(CartItem::new("p1", "Rice", 3000, 0)), &())
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::InvalidQuantity { quantity: 0, .. }));
        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn test_remove_missing_item_fails() {
        let mut cart = cart();
        let err = cart
            .handle_action(CartAction::RemoveItem { product_id: "nope".into() }, &())
            .await
            .unwrap_err();
        assert_eq!(err, CartError::ItemNotInCart("nope".into()));
    }

    #[tokio::test]
    async fn test_clear_keeps_notifications() {
        let mut cart = cart();
        cart.handle_action(CartAction::AddItem(CartItem::new("p1", "Beans", 800, 1)), &())
            .await
            .unwrap();
        let summary = cart.handle_action(CartAction::Clear, &()).await.unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total_price, 0);
        assert_eq!(summary.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_quantity_overflow_is_rejected_and_cart_kept() {
        let mut cart = cart();
        cart.handle_action(CartAction::AddItem(CartItem::new("p1", "Pepper", 10, u32::MAX)), &())
            .await
            .unwrap();

        let err = cart
            .handle_action(CartAction::AddItem(CartItem::new("p1", "Pepper", 10, 1)), &())
            .await
            .unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow("p1".into()));
        assert_eq!(cart.items[0].quantity, u32::MAX);

        // A new line can overflow the item count too.
        let err = cart
            .handle_action(CartAction::AddItem(CartItem::new("p2", "Salt", 10, 1)), &())
            .await
            .unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow("p2".into()));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_price_overflow_is_rejected() {
        let mut cart = cart();
        let err = cart
            .handle_action(CartAction::AddItem(CartItem::new("p1", "Gold", u64::MAX, 2)), &())
            .await
            .unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow("p1".into()));
        assert!(cart.items.is_empty());
        assert!(cart.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_actor_survives_overflowing_add() {
        let (actor, client) = crate::cart_actor::new(8);
        let handle = tokio::spawn(actor.run(()));

        let cart_id = client.create_cart("user_1").await.unwrap();
        client
            .add_item(cart_id, CartItem::new("p1", "Pepper", 10, u32::MAX))
            .await
            .unwrap();
        let err = client
            .add_item(cart_id, CartItem::new("p1", "Pepper", 10, 1))
            .await
            .unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow("p1".into()));

        assert!(client.create_cart("user_2").await.is_ok());
        assert_eq!(client.summary(cart_id).await.unwrap().total_items, u32::MAX);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_take_for_order_snapshots_then_empties() {
        let mut cart = cart();
        cart.handle_action(CartAction::AddItem(CartItem::new("p1", "Egusi", 2500, 2)), &())
            .await
            .unwrap();

        let taken = cart
            .handle_action(CartAction::TakeForOrder { order_id: "order_3".into() }, &())
            .await
            .unwrap();
        assert_eq!(taken.total_price, 5000);
        assert_eq!(taken.cart_items.len(), 1);

        assert!(cart.items.is_empty());
        assert_eq!(cart.notifications.last().unwrap(), "Order order_3 placed");
    }

    #[tokio::test]
    async fn test_take_for_order_leaves_empty_cart_alone() {
        let mut cart = cart();
        let taken = cart
            .handle_action(CartAction::TakeForOrder { order_id: "order_1".into() }, &())
            .await
            .unwrap();
        assert!(taken.is_empty());
        assert!(cart.notifications.is_empty());
    }
}
