//! Mattress/bed size options.

use crate::ids::SizeId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Reference width in centimeters (the "double" size).
pub const REFERENCE_WIDTH_CM: u32 = 140;

/// Reference length in centimeters (the "double" size).
pub const REFERENCE_LENGTH_CM: u32 = 200;

/// Minimum customer-selectable custom width in centimeters.
pub const MIN_CUSTOM_WIDTH_CM: u32 = 80;

/// Maximum customer-selectable custom width in centimeters.
pub const MAX_CUSTOM_WIDTH_CM: u32 = 220;

/// Minimum customer-selectable custom length in centimeters.
pub const MIN_CUSTOM_LENGTH_CM: u32 = 180;

/// Maximum customer-selectable custom length in centimeters.
pub const MAX_CUSTOM_LENGTH_CM: u32 = 220;

/// A size a product is offered in.
///
/// The price delta is relative to the reference ("double") size and can
/// be negative, zero, or positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeOption {
    /// Unique size identifier within the product (e.g., "double").
    pub id: SizeId,
    /// Display label (e.g., "160 x 200").
    pub label: String,
    /// Price difference relative to the reference size.
    pub price_delta: Money,
}

impl SizeOption {
    /// Create a new size option.
    pub fn new(id: impl Into<SizeId>, label: impl Into<String>, price_delta: Money) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price_delta,
        }
    }

    /// The baseline "double" size with zero delta.
    pub fn baseline(currency: Currency) -> Self {
        Self::new(
            "double",
            format!("{} x {}", REFERENCE_WIDTH_CM, REFERENCE_LENGTH_CM),
            Money::zero(currency),
        )
    }

    /// Check whether this is the reference size.
    pub fn is_baseline(&self) -> bool {
        self.id.as_str() == "double"
    }
}

/// Area of the reference size in square centimeters.
pub fn reference_area_sq_cm() -> i64 {
    REFERENCE_WIDTH_CM as i64 * REFERENCE_LENGTH_CM as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_baseline_size() {
        let size = SizeOption::baseline(Currency::RSD);
        assert!(size.is_baseline());
        assert!(size.price_delta.is_zero());
        assert_eq!(size.label, "140 x 200");
    }

    #[test]
    fn test_reference_area() {
        assert_eq!(reference_area_sq_cm(), 28_000);
    }
}
