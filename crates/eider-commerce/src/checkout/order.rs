//! Order types.
//!
//! An order is the immutable, checked-out snapshot of a cart: items and
//! totals are frozen at creation and only the status moves afterwards.

use crate::cart::Cart;
use crate::checkout::Address;
use crate::error::CommerceError;
use crate::ids::{CartLineId, OrderId, OrderItemId, ProductId, UserId};
use crate::money::{Currency, Money};
use crate::pricing::Configuration;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Processing,
    /// Order delivered and done.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Check if order can be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

/// A completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    pub phone: Option<String>,
    /// Order status.
    pub status: OrderStatus,
    /// Items in the order.
    pub items: Vec<OrderItem>,
    /// Delivery address.
    pub shipping_address: Address,
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Total discount amount.
    pub discount_total: Money,
    /// Grand total charged.
    pub grand_total: Money,
    /// Order currency.
    pub currency: Currency,
    /// Customer note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Create an order from a cart.
    ///
    /// Items and totals are snapshotted from the cart's frozen lines.
    /// Rejects an empty cart and an incomplete delivery address.
    pub fn from_cart(
        cart: &Cart,
        email: impl Into<String>,
        shipping_address: Address,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if !shipping_address.is_complete() {
            return Err(CommerceError::IncompleteAddress);
        }

        let totals = cart.totals()?;
        let items = cart
            .lines
            .iter()
            .map(|line| OrderItem {
                id: OrderItemId::generate(),
                cart_line_id: line.id.clone(),
                product_id: line.product_id.clone(),
                product_name: line.product_name.clone(),
                configuration: line.configuration.clone(),
                unit_price: line.unit_price,
                discount_percent: line.discount_percent,
                quantity: line.quantity,
                line_total: line.line_total,
                discount_amount: line.discount_amount(),
            })
            .collect();

        let now = current_timestamp();
        Ok(Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            user_id: cart.user_id.clone(),
            email: email.into(),
            phone: shipping_address.phone.clone(),
            status: OrderStatus::Pending,
            items,
            shipping_address,
            subtotal: totals.subtotal,
            discount_total: totals.discount_total,
            grand_total: totals.grand_total,
            currency: cart.currency,
            note: None,
            created_at: now,
            updated_at: now,
            cancelled_at: None,
        })
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("EID-{}", ts)
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Move the order into processing.
    pub fn mark_processing(&mut self) -> Result<(), CommerceError> {
        self.transition(OrderStatus::Pending, OrderStatus::Processing)
    }

    /// Mark the order completed.
    pub fn mark_completed(&mut self) -> Result<(), CommerceError> {
        self.transition(OrderStatus::Processing, OrderStatus::Completed)
    }

    /// Cancel the order.
    ///
    /// Allowed from any non-terminal state.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        if !self.status.can_cancel() {
            return Err(CommerceError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: OrderStatus::Cancelled.as_str().to_string(),
            });
        }
        self.status = OrderStatus::Cancelled;
        self.cancelled_at = Some(current_timestamp());
        self.updated_at = current_timestamp();
        Ok(())
    }

    fn transition(&mut self, from: OrderStatus, to: OrderStatus) -> Result<(), CommerceError> {
        if self.status != from {
            return Err(CommerceError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.status = to;
        self.updated_at = current_timestamp();
        Ok(())
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique order item identifier.
    pub id: OrderItemId,
    /// The cart line this item was created from.
    pub cart_line_id: CartLineId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub product_name: String,
    /// Configuration at time of order.
    pub configuration: Configuration,
    /// Pre-discount unit price at time of order.
    pub unit_price: Money,
    /// Discount percentage at time of order.
    pub discount_percent: u8,
    /// Quantity ordered.
    pub quantity: i64,
    /// Line total before discount.
    pub line_total: Money,
    /// Discount applied to this line.
    pub discount_amount: Money,
}

impl OrderItem {
    /// Final total for this item after discount.
    pub fn total(&self) -> Money {
        self.line_total - self.discount_amount
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Fabric, FabricCategory, Product, ProductCategory, SizeOption};
    use crate::pricing::SizeSelection;

    fn luna_mattress() -> Product {
        let mut product = Product::new(
            "MAT-LUNA",
            "Luna Mattress",
            "luna-mattress",
            ProductCategory::Mattress,
            Money::new(41900, Currency::RSD),
        );
        product.add_size(SizeOption::baseline(Currency::RSD));
        product.add_fabric_category(FabricCategory::standard("standard", "Standard"));
        product.add_fabric(Fabric::new("aura-04", "Aura 04", "standard"));
        product.set_discount(10).unwrap();
        product
    }

    fn filled_cart() -> Cart {
        let mut cart = Cart::new("session-123");
        let config =
            Configuration::new(SizeSelection::catalog("double"), "standard", "aura-04");
        cart.add_line(&luna_mattress(), config, 2).unwrap();
        cart
    }

    fn delivery_address() -> Address {
        Address::new(
            "Mila",
            "Petrovic",
            "Bulevar kralja Aleksandra 73",
            "Beograd",
            "11000",
            "Serbia",
            "RS",
        )
    }

    #[test]
    fn test_order_from_cart_snapshots_totals() {
        let cart = filled_cart();
        let expected = cart.totals().unwrap();

        let order = Order::from_cart(&cart, "mila@example.com", delivery_address()).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.subtotal, expected.subtotal);
        assert_eq!(order.discount_total, expected.discount_total);
        assert_eq!(order.grand_total, expected.grand_total);
        assert!(order.order_number.starts_with("EID-"));
    }

    #[test]
    fn test_order_item_total() {
        let cart = filled_cart();
        let order = Order::from_cart(&cart, "mila@example.com", delivery_address()).unwrap();

        let item = &order.items[0];
        assert_eq!(item.line_total.amount, 83800);
        assert_eq!(item.discount_amount.amount, 8380);
        assert_eq!(item.total().amount, 75420);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let cart = Cart::new("session-123");
        let result = Order::from_cart(&cart, "mila@example.com", delivery_address());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_incomplete_address_rejected() {
        let cart = filled_cart();
        let result = Order::from_cart(&cart, "mila@example.com", Address::default());
        assert!(matches!(result, Err(CommerceError::IncompleteAddress)));
    }

    #[test]
    fn test_status_transitions() {
        let cart = filled_cart();
        let mut order = Order::from_cart(&cart, "mila@example.com", delivery_address()).unwrap();

        // Completing before processing is illegal.
        assert!(order.mark_completed().is_err());

        order.mark_processing().unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        order.mark_completed().unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_cancel_rules() {
        let cart = filled_cart();
        let mut order = Order::from_cart(&cart, "mila@example.com", delivery_address()).unwrap();

        order.mark_processing().unwrap();
        order.cancel().unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.cancelled_at.is_some());

        // Terminal: cannot cancel twice or resume.
        assert!(order.cancel().is_err());
        assert!(order.mark_processing().is_err());
    }
}
