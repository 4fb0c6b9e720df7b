//! Checkout module.
//!
//! Contains types for delivery addresses and orders.

mod address;
mod order;

pub use address::Address;
pub use order::{Order, OrderItem, OrderStatus};
