//! Pricing module.
//!
//! Contains the configuration state and the pure price engine.

mod configuration;
pub mod engine;

pub use configuration::{Configuration, SizeSelection};
pub use engine::{quote, PriceBreakdown, AREA_STEP_PRICE, AREA_STEP_SQ_CM};
