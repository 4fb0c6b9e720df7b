//! Per-product configuration state.
//!
//! A `Configuration` holds the customer's current selections for the
//! product being viewed. It is an explicit value passed into the price
//! engine and frozen onto cart lines, never process-wide state.

use crate::catalog::{
    Product, MAX_CUSTOM_LENGTH_CM, MAX_CUSTOM_WIDTH_CM, MIN_CUSTOM_LENGTH_CM, MIN_CUSTOM_WIDTH_CM,
};
use crate::error::CommerceError;
use crate::ids::{FabricCategoryId, FabricId, SizeId};
use serde::{Deserialize, Serialize};

/// The selected size: either a catalog size or custom dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSelection {
    /// One of the product's listed sizes.
    Catalog(SizeId),
    /// Made-to-measure dimensions in centimeters.
    Custom { width_cm: u32, length_cm: u32 },
}

impl SizeSelection {
    /// Convenience constructor for a catalog size.
    pub fn catalog(id: impl Into<SizeId>) -> Self {
        SizeSelection::Catalog(id.into())
    }

    /// Convenience constructor for custom dimensions.
    pub fn custom(width_cm: u32, length_cm: u32) -> Self {
        SizeSelection::Custom {
            width_cm,
            length_cm,
        }
    }

    /// Check whether this is a custom-dimension selection.
    pub fn is_custom(&self) -> bool {
        matches!(self, SizeSelection::Custom { .. })
    }
}

/// The customer's current selections for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Selected size.
    pub size: SizeSelection,
    /// Selected fabric pricing tier.
    pub fabric_category_id: FabricCategoryId,
    /// Selected fabric within the tier.
    pub fabric_id: FabricId,
    /// Whether the lifting mechanism is selected.
    pub with_lifting: bool,
}

impl Configuration {
    /// Create a configuration with the lifting mechanism deselected.
    pub fn new(
        size: SizeSelection,
        fabric_category_id: impl Into<FabricCategoryId>,
        fabric_id: impl Into<FabricId>,
    ) -> Self {
        Self {
            size,
            fabric_category_id: fabric_category_id.into(),
            fabric_id: fabric_id.into(),
            with_lifting: false,
        }
    }

    /// Select or deselect the lifting mechanism.
    pub fn with_lifting(mut self, selected: bool) -> Self {
        self.with_lifting = selected;
        self
    }

    /// Validate the configuration against a product definition.
    ///
    /// This is the input boundary: the price engine assumes already
    /// validated input and degrades missing lookups to zero deltas
    /// instead of failing.
    pub fn validate(&self, product: &Product) -> Result<(), CommerceError> {
        match &self.size {
            SizeSelection::Catalog(size_id) => {
                if product.size(size_id).is_none() {
                    return Err(CommerceError::SizeNotFound(size_id.to_string()));
                }
            }
            SizeSelection::Custom {
                width_cm,
                length_cm,
            } => {
                check_dimension("width", *width_cm, MIN_CUSTOM_WIDTH_CM, MAX_CUSTOM_WIDTH_CM)?;
                check_dimension(
                    "length",
                    *length_cm,
                    MIN_CUSTOM_LENGTH_CM,
                    MAX_CUSTOM_LENGTH_CM,
                )?;
            }
        }

        if product.fabric_category(&self.fabric_category_id).is_none() {
            return Err(CommerceError::FabricCategoryNotFound(
                self.fabric_category_id.to_string(),
            ));
        }

        let fabric = product
            .fabric(&self.fabric_id)
            .ok_or_else(|| CommerceError::FabricNotFound(self.fabric_id.to_string()))?;
        if fabric.category_id != self.fabric_category_id {
            return Err(CommerceError::FabricCategoryMismatch {
                fabric: self.fabric_id.to_string(),
                category: self.fabric_category_id.to_string(),
            });
        }

        if self.with_lifting && !product.supports_lifting() {
            return Err(CommerceError::LiftingNotAvailable(product.id.to_string()));
        }

        Ok(())
    }
}

fn check_dimension(
    dimension: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), CommerceError> {
    if value < min || value > max {
        return Err(CommerceError::DimensionOutOfRange {
            dimension,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Fabric, FabricCategory, ProductCategory, SizeOption};
    use crate::money::{Currency, Money};

    fn bed() -> Product {
        let mut product = Product::new(
            "BED-NOVA",
            "Nova Bed",
            "nova-bed",
            ProductCategory::Bed,
            Money::new(64900, Currency::RSD),
        );
        product.add_size(SizeOption::baseline(Currency::RSD));
        product.add_size(SizeOption::new(
            "king",
            "180 x 200",
            Money::new(6000, Currency::RSD),
        ));
        product.add_fabric_category(FabricCategory::standard("standard", "Standard"));
        product.add_fabric_category(FabricCategory::tier("premium", "Premium", 1.15));
        product.add_fabric(Fabric::new("aura-04", "Aura 04", "standard"));
        product.add_fabric(Fabric::new("inari-91", "Inari 91", "premium"));
        product
    }

    #[test]
    fn test_valid_catalog_configuration() {
        let config = Configuration::new(SizeSelection::catalog("king"), "standard", "aura-04");
        assert!(config.validate(&bed()).is_ok());
    }

    #[test]
    fn test_unknown_size_rejected() {
        let config = Configuration::new(SizeSelection::catalog("queen"), "standard", "aura-04");
        assert!(matches!(
            config.validate(&bed()),
            Err(CommerceError::SizeNotFound(_))
        ));
    }

    #[test]
    fn test_custom_dimensions_in_bounds() {
        let config = Configuration::new(SizeSelection::custom(160, 220), "standard", "aura-04");
        assert!(config.validate(&bed()).is_ok());
    }

    #[test]
    fn test_custom_dimensions_out_of_bounds() {
        let too_narrow =
            Configuration::new(SizeSelection::custom(79, 200), "standard", "aura-04");
        assert!(matches!(
            too_narrow.validate(&bed()),
            Err(CommerceError::DimensionOutOfRange {
                dimension: "width",
                ..
            })
        ));

        let too_long =
            Configuration::new(SizeSelection::custom(160, 221), "standard", "aura-04");
        assert!(matches!(
            too_long.validate(&bed()),
            Err(CommerceError::DimensionOutOfRange {
                dimension: "length",
                ..
            })
        ));
    }

    #[test]
    fn test_fabric_must_belong_to_category() {
        let config = Configuration::new(
            SizeSelection::catalog("double"),
            "standard",
            "inari-91", // a premium fabric
        );
        assert!(matches!(
            config.validate(&bed()),
            Err(CommerceError::FabricCategoryMismatch { .. })
        ));
    }

    #[test]
    fn test_lifting_requires_support() {
        let mut product = bed();
        // No mechanism configured yet.
        let config = Configuration::new(SizeSelection::catalog("double"), "standard", "aura-04")
            .with_lifting(true);
        assert!(matches!(
            config.validate(&product),
            Err(CommerceError::LiftingNotAvailable(_))
        ));

        product.lifting_mechanism = Some(crate::catalog::LiftingMechanism::new(Money::new(
            8900,
            Currency::RSD,
        )));
        assert!(config.validate(&product).is_ok());
    }
}
