//! Product catalog module.
//!
//! Contains types for products, sizes, fabrics, and fabric pricing tiers.

mod fabric;
mod product;
mod size;

pub use fabric::{Fabric, FabricCategory};
pub use product::{LiftingMechanism, Product, ProductCategory};
pub use size::{
    reference_area_sq_cm, SizeOption, MAX_CUSTOM_LENGTH_CM, MAX_CUSTOM_WIDTH_CM,
    MIN_CUSTOM_LENGTH_CM, MIN_CUSTOM_WIDTH_CM, REFERENCE_LENGTH_CM, REFERENCE_WIDTH_CM,
};
