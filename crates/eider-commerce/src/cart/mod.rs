//! Shopping cart module.
//!
//! Contains types for the cart, cart lines, and totals aggregation.

mod cart;
mod totals;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use totals::{CartTotals, LineTotals};
