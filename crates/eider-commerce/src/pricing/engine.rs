//! The price engine.
//!
//! Pure functions computing the unit price of a configured product from
//! its catalog definition. No lookups outside the passed-in product, no
//! side effects.
//!
//! Lookup misses (unknown size or fabric-category ids) degrade to a zero
//! delta rather than failing; validation is the caller's job via
//! [`Configuration::validate`](crate::pricing::Configuration::validate).

use crate::catalog::{reference_area_sq_cm, Product};
use crate::ids::FabricCategoryId;
use crate::money::Money;
use crate::pricing::{Configuration, SizeSelection};
use serde::{Deserialize, Serialize};

/// Price step applied per `AREA_STEP_SQ_CM` of area difference, in minor
/// currency units.
pub const AREA_STEP_PRICE: i64 = 10;

/// Area granularity of custom-size pricing, in square centimeters.
pub const AREA_STEP_SQ_CM: i64 = 100;

/// The computed price of one unit of a configured product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    /// The product's base price.
    pub base_price: Money,
    /// Surcharge (or rebate) for the selected size.
    pub size_delta: Money,
    /// Surcharge (or rebate) for the selected fabric tier.
    pub fabric_delta: Money,
    /// Surcharge for the lifting mechanism.
    pub addon_delta: Money,
    /// Base price plus all deltas, before discount.
    pub subtotal: Money,
    /// Discount taken off the subtotal.
    pub discount_amount: Money,
    /// Final price for one unit.
    pub unit_price: Money,
}

/// Compute the size delta for a selection.
///
/// Catalog sizes use their stored delta (zero when the id is unknown).
/// Custom dimensions start from the baseline size's stored delta and add
/// a fixed rate per [`AREA_STEP_SQ_CM`] of area difference against the
/// reference size, giving a price function that is continuous around the
/// baseline rather than a discrete lookup.
pub fn size_delta(product: &Product, selection: &SizeSelection) -> Money {
    let currency = product.base_price.currency;
    match selection {
        SizeSelection::Catalog(size_id) => product
            .size(size_id)
            .map(|s| s.price_delta)
            .unwrap_or_else(|| Money::zero(currency)),
        SizeSelection::Custom {
            width_cm,
            length_cm,
        } => {
            let reference = product
                .baseline_size()
                .map(|s| s.price_delta)
                .unwrap_or_else(|| Money::zero(currency));
            let custom_area = *width_cm as i64 * *length_cm as i64;
            let area_diff = custom_area - reference_area_sq_cm();
            let scaled = area_diff * AREA_STEP_PRICE / AREA_STEP_SQ_CM;
            reference + Money::new(scaled, currency)
        }
    }
}

/// Compute the fabric delta for a fabric tier.
///
/// The standard tier defines the base price and contributes zero. Other
/// tiers contribute `base_price * (multiplier - 1)`: negative for
/// economy tiers, positive for premium tiers. Unknown tiers contribute
/// zero.
pub fn fabric_delta(product: &Product, category_id: &FabricCategoryId) -> Money {
    let currency = product.base_price.currency;
    match product.fabric_category(category_id) {
        Some(category) if !category.standard => product
            .base_price
            .multiply_decimal(category.price_multiplier - 1.0),
        _ => Money::zero(currency),
    }
}

/// Compute the add-on delta for the lifting mechanism.
///
/// The mechanism's fixed price when selected and supported by the
/// product (bed category with a configured mechanism), else zero.
pub fn addon_delta(product: &Product, with_lifting: bool) -> Money {
    if with_lifting && product.supports_lifting() {
        product
            .lifting_mechanism
            .as_ref()
            .map(|m| m.price)
            .unwrap_or_else(|| Money::zero(product.base_price.currency))
    } else {
        Money::zero(product.base_price.currency)
    }
}

/// Compute the full unit-price breakdown for a configuration.
///
/// Negative results are not clamped here; catalog data that prices a
/// configuration below zero is a data error for the boundary to surface.
pub fn quote(product: &Product, configuration: &Configuration) -> PriceBreakdown {
    let base_price = product.base_price;
    let size_delta = size_delta(product, &configuration.size);
    let fabric_delta = fabric_delta(product, &configuration.fabric_category_id);
    let addon_delta = addon_delta(product, configuration.with_lifting);

    let subtotal = base_price + size_delta + fabric_delta + addon_delta;
    let discount_amount = if product.discount_percent > 0 {
        subtotal.percentage(product.discount_percent as f64)
    } else {
        Money::zero(base_price.currency)
    };
    let unit_price = subtotal - discount_amount;

    PriceBreakdown {
        base_price,
        size_delta,
        fabric_delta,
        addon_delta,
        subtotal,
        discount_amount,
        unit_price,
    }
}
