//! Cart aggregation types.
//!
//! Totals are computed strictly from the frozen snapshots on cart lines;
//! the price engine is never re-run here, so historical lines stay
//! stable when the underlying products change.

use crate::ids::CartLineId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete totals breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals before discounts.
    pub subtotal: Money,
    /// Sum of per-line discount amounts.
    pub discount_total: Money,
    /// Final total (subtotal - discounts).
    pub grand_total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LineTotals>,
}

impl CartTotals {
    /// Check if any discounts apply.
    pub fn has_discounts(&self) -> bool {
        self.discount_total.is_positive()
    }

    /// Get the discount as a percentage of the subtotal.
    pub fn discount_percentage(&self) -> f64 {
        if self.subtotal.amount == 0 {
            return 0.0;
        }
        (self.discount_total.amount as f64 / self.subtotal.amount as f64) * 100.0
    }
}

/// Totals breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotals {
    /// Cart line ID.
    pub line_id: CartLineId,
    /// Frozen pre-discount unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity) before discount.
    pub line_total: Money,
    /// Discount applied to this line.
    pub discount_amount: Money,
    /// Final total for this line.
    pub total: Money,
}

impl LineTotals {
    /// Effective unit price after the line discount.
    pub fn effective_unit_price(&self) -> Money {
        if self.quantity == 0 {
            return self.unit_price;
        }
        Money::new(self.total.amount / self.quantity, self.total.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_discount_percentage() {
        let totals = CartTotals {
            subtotal: Money::new(41900, Currency::RSD),
            discount_total: Money::new(4190, Currency::RSD),
            grand_total: Money::new(37710, Currency::RSD),
            lines: vec![],
        };

        assert!(totals.has_discounts());
        assert!((totals.discount_percentage() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_effective_unit_price() {
        let line = LineTotals {
            line_id: CartLineId::new("line-1"),
            unit_price: Money::new(41900, Currency::RSD),
            quantity: 2,
            line_total: Money::new(83800, Currency::RSD),
            discount_amount: Money::new(8380, Currency::RSD),
            total: Money::new(75420, Currency::RSD),
        };

        assert_eq!(line.effective_unit_price().amount, 37710);
    }
}
