//! Fabric and fabric category types.

use crate::ids::{FabricCategoryId, FabricId};
use serde::{Deserialize, Serialize};

/// A fabric pricing tier.
///
/// The multiplier scales the product's base price: 1.0 means no change,
/// below 1.0 is an economy tier, above 1.0 a premium tier. Exactly one
/// category per product should be marked `standard`; it defines the base
/// price and always contributes a zero fabric delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FabricCategory {
    /// Unique category identifier within the product.
    pub id: FabricCategoryId,
    /// Display name (e.g., "Premium").
    pub name: String,
    /// Base-price multiplier for this tier.
    pub price_multiplier: f64,
    /// Whether this is the designated standard tier.
    pub standard: bool,
}

impl FabricCategory {
    /// Create the standard tier (multiplier 1.0).
    pub fn standard(id: impl Into<FabricCategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_multiplier: 1.0,
            standard: true,
        }
    }

    /// Create a non-standard tier with the given multiplier.
    pub fn tier(
        id: impl Into<FabricCategoryId>,
        name: impl Into<String>,
        price_multiplier: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_multiplier,
            standard: false,
        }
    }

    /// Check if this is an economy tier (multiplier below 1.0).
    pub fn is_economy(&self) -> bool {
        !self.standard && self.price_multiplier < 1.0
    }

    /// Check if this is a premium tier (multiplier above 1.0).
    pub fn is_premium(&self) -> bool {
        !self.standard && self.price_multiplier > 1.0
    }
}

/// A fabric a product can be upholstered in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fabric {
    /// Unique fabric identifier within the product.
    pub id: FabricId,
    /// Display name (e.g., "Inari 91").
    pub name: String,
    /// The pricing tier this fabric belongs to.
    pub category_id: FabricCategoryId,
}

impl Fabric {
    /// Create a new fabric.
    pub fn new(
        id: impl Into<FabricId>,
        name: impl Into<String>,
        category_id: impl Into<FabricCategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_category() {
        let cat = FabricCategory::standard("standard", "Standard");
        assert!(cat.standard);
        assert!(!cat.is_economy());
        assert!(!cat.is_premium());
    }

    #[test]
    fn test_tier_classification() {
        let economy = FabricCategory::tier("economy", "Economy", 0.9);
        let premium = FabricCategory::tier("premium", "Premium", 1.15);

        assert!(economy.is_economy());
        assert!(premium.is_premium());
    }

    #[test]
    fn test_fabric_category_link() {
        let fabric = Fabric::new("inari-91", "Inari 91", "premium");
        assert_eq!(fabric.category_id, FabricCategoryId::new("premium"));
    }
}
