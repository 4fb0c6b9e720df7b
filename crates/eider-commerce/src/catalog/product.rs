//! Product types.

use crate::catalog::{Fabric, FabricCategory, SizeOption};
use crate::error::CommerceError;
use crate::ids::{FabricCategoryId, FabricId, ProductId, SizeId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product category in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductCategory {
    /// A mattress.
    #[default]
    Mattress,
    /// A bed frame (may offer a lifting mechanism).
    Bed,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Mattress => "mattress",
            ProductCategory::Bed => "bed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mattress" => Some(ProductCategory::Mattress),
            "bed" => Some(ProductCategory::Bed),
            _ => None,
        }
    }
}

/// An optional lifting-mechanism add-on with a fixed price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiftingMechanism {
    /// Fixed price added when the mechanism is selected.
    pub price: Money,
}

impl LiftingMechanism {
    pub fn new(price: Money) -> Self {
        Self { price }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description (may contain HTML/markdown).
    pub description: Option<String>,
    /// Product category.
    pub category: ProductCategory,
    /// Price before any size/fabric/add-on/discount adjustments.
    pub base_price: Money,
    /// Sizes this product is offered in, in display order.
    pub sizes: Vec<SizeOption>,
    /// Fabric pricing tiers.
    pub fabric_categories: Vec<FabricCategory>,
    /// Fabrics, each tagged with a fabric category.
    pub fabrics: Vec<Fabric>,
    /// Optional lifting-mechanism add-on (beds only).
    pub lifting_mechanism: Option<LiftingMechanism>,
    /// Discount percentage (0-100).
    pub discount_percent: u8,
    /// Whether the product is in stock.
    pub in_stock: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new product with no sizes or fabrics yet.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        category: ProductCategory,
        base_price: Money,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            category,
            base_price,
            sizes: Vec::new(),
            fabric_categories: Vec::new(),
            fabrics: Vec::new(),
            lifting_mechanism: None,
            discount_percent: 0,
            in_stock: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Check if the product has an active discount.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Check if the lifting mechanism can be selected for this product.
    ///
    /// The mechanism only applies to bed-category products.
    pub fn supports_lifting(&self) -> bool {
        self.category == ProductCategory::Bed && self.lifting_mechanism.is_some()
    }

    /// Look up a size option by id.
    pub fn size(&self, id: &SizeId) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| &s.id == id)
    }

    /// Look up a fabric by id.
    pub fn fabric(&self, id: &FabricId) -> Option<&Fabric> {
        self.fabrics.iter().find(|f| &f.id == id)
    }

    /// Look up a fabric category by id.
    pub fn fabric_category(&self, id: &FabricCategoryId) -> Option<&FabricCategory> {
        self.fabric_categories.iter().find(|c| &c.id == id)
    }

    /// Get the baseline size option, if the product offers one.
    pub fn baseline_size(&self) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.is_baseline())
    }

    /// Add a size option.
    pub fn add_size(&mut self, size: SizeOption) {
        self.sizes.push(size);
        self.updated_at = current_timestamp();
    }

    /// Add a fabric category.
    pub fn add_fabric_category(&mut self, category: FabricCategory) {
        self.fabric_categories.push(category);
        self.updated_at = current_timestamp();
    }

    /// Add a fabric.
    pub fn add_fabric(&mut self, fabric: Fabric) {
        self.fabrics.push(fabric);
        self.updated_at = current_timestamp();
    }

    /// Set the discount percentage.
    pub fn set_discount(&mut self, percent: u8) -> Result<(), CommerceError> {
        if percent > 100 {
            return Err(CommerceError::DiscountOutOfRange(percent));
        }
        self.discount_percent = percent;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Validate referential integrity of the product definition.
    ///
    /// Every fabric's category tag must reference an existing fabric
    /// category, and the discount percentage must be within 0-100.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.discount_percent > 100 {
            return Err(CommerceError::DiscountOutOfRange(self.discount_percent));
        }
        for fabric in &self.fabrics {
            if self.fabric_category(&fabric.category_id).is_none() {
                return Err(CommerceError::FabricNotInCatalog {
                    fabric: fabric.id.to_string(),
                    category: fabric.category_id.to_string(),
                });
            }
        }
        Ok(())
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
