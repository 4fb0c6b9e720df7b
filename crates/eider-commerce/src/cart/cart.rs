//! Cart and cart line types.

use crate::cart::{CartTotals, LineTotals};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CartId, CartLineId, ProductId, UserId};
use crate::money::{Currency, Money};
use crate::pricing::{self, Configuration};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session ID for anonymous carts.
    pub session_id: String,
    /// User ID for authenticated carts.
    pub user_id: Option<UserId>,
    /// Lines in the cart.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new cart for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            user_id: None,
            lines: Vec::new(),
            currency: Currency::RSD,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a cart for an authenticated user.
    pub fn for_user(user_id: UserId, session_id: impl Into<String>) -> Self {
        let mut cart = Self::new(session_id);
        cart.user_id = Some(user_id);
        cart
    }

    /// Add a configured product to the cart.
    ///
    /// Validates the configuration against the product, runs the price
    /// engine once, and freezes the resulting pre-discount unit price and
    /// the product's discount percentage onto the line. A line with the
    /// same product and configuration has its quantity increased instead.
    ///
    /// Returns an error if:
    /// - The product is out of stock or priced in another currency
    /// - The configuration fails validation
    /// - Quantity is not positive or would exceed MAX_QUANTITY_PER_LINE
    /// - Arithmetic overflow would occur
    pub fn add_line(
        &mut self,
        product: &Product,
        configuration: Configuration,
        quantity: i64,
    ) -> Result<CartLineId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !product.is_available() {
            return Err(CommerceError::ProductUnavailable(product.id.to_string()));
        }
        if product.base_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.base_price.currency.code().to_string(),
            });
        }
        configuration.validate(product)?;

        // The one place the engine runs for a cart: everything after this
        // trusts the snapshot.
        let breakdown = pricing::quote(product, &configuration);

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id && l.configuration == configuration)
        {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }

            existing.quantity = new_quantity;
            existing.update_total()?;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        let line = CartLine::new(
            product.id.clone(),
            product.name.clone(),
            configuration,
            breakdown.subtotal,
            product.discount_percent,
            quantity,
        )?;
        let id = line.id.clone();
        self.lines.push(line);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Update line quantity.
    ///
    /// If quantity is <= 0, removes the line.
    /// Returns error if quantity exceeds limit or would cause overflow.
    pub fn update_quantity(
        &mut self,
        line_id: &CartLineId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_line(line_id));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) {
            line.quantity = quantity;
            line.update_total()?;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart.
    pub fn remove_line(&mut self, line_id: &CartLineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Get number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by ID.
    pub fn get_line(&self, line_id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Calculate cart totals from the frozen line snapshots.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        let lines: Vec<LineTotals> = self
            .lines
            .iter()
            .map(|line| {
                let discount_amount = line.discount_amount();
                LineTotals {
                    line_id: line.id.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    line_total: line.line_total,
                    discount_amount,
                    total: line.line_total - discount_amount,
                }
            })
            .collect();

        let subtotal = Money::try_sum(self.lines.iter().map(|l| &l.line_total), self.currency)
            .ok_or(CommerceError::Overflow)?;

        let discounts: Vec<Money> = lines.iter().map(|l| l.discount_amount).collect();
        let discount_total =
            Money::try_sum(discounts.iter(), self.currency).ok_or(CommerceError::Overflow)?;

        let grand_total = subtotal
            .try_subtract(&discount_total)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            subtotal,
            discount_total,
            grand_total,
            lines,
        })
    }

    /// Merge another cart into this one (e.g., when a user logs in).
    ///
    /// Lines that would exceed the quantity limit are capped at
    /// MAX_QUANTITY_PER_LINE. Snapshots from the incoming cart are kept
    /// as-is; nothing is re-priced.
    pub fn merge(&mut self, other: Cart) -> Result<(), CommerceError> {
        for line in other.lines {
            if let Some(existing) = self
                .lines
                .iter_mut()
                .find(|l| l.product_id == line.product_id && l.configuration == line.configuration)
            {
                let new_quantity = existing
                    .quantity
                    .saturating_add(line.quantity)
                    .min(MAX_QUANTITY_PER_LINE);
                existing.quantity = new_quantity;
                existing.update_total()?;
            } else {
                self.lines.push(line);
            }
        }
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Set the cart for an authenticated user.
    pub fn set_user(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
        self.updated_at = current_timestamp();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

/// A line in the cart.
///
/// The configuration, pre-discount unit price, and discount percentage
/// are frozen at add time: the price the customer saw is honored through
/// checkout even if the product changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: CartLineId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Frozen configuration snapshot.
    pub configuration: Configuration,
    /// Frozen pre-discount unit price.
    pub unit_price: Money,
    /// Frozen discount percentage (0-100).
    pub discount_percent: u8,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity) before discount.
    pub line_total: Money,
}

impl CartLine {
    /// Create a new cart line.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        configuration: Configuration,
        unit_price: Money,
        discount_percent: u8,
        quantity: i64,
    ) -> Result<Self, CommerceError> {
        if discount_percent > 100 {
            return Err(CommerceError::DiscountOutOfRange(discount_percent));
        }
        let line_total = unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            id: CartLineId::generate(),
            product_id,
            product_name: product_name.into(),
            configuration,
            unit_price,
            discount_percent,
            quantity,
            line_total,
        })
    }

    /// Update the line total based on quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.line_total = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }

    /// Discount amount for this line, from the frozen percentage.
    pub fn discount_amount(&self) -> Money {
        if self.discount_percent > 0 {
            self.line_total.percentage(self.discount_percent as f64)
        } else {
            Money::zero(self.line_total.currency)
        }
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
