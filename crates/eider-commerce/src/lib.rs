//! E-commerce domain types and pricing logic for the Eider furniture
//! storefront.
//!
//! This crate is the library-level core the surrounding application
//! (routing, persistence, UI) calls into:
//!
//! - **Catalog**: Products with sizes, fabric tiers, and add-ons
//! - **Pricing**: Configuration state and the pure price engine
//! - **Cart**: Shopping cart with frozen price snapshots and totals
//! - **Checkout**: Delivery addresses and immutable order snapshots
//!
//! # Example
//!
//! ```rust,ignore
//! use eider_commerce::prelude::*;
//!
//! // Configure a product the customer is viewing
//! let config = Configuration::new(
//!     SizeSelection::catalog("double"),
//!     "standard",
//!     "aura-04",
//! );
//!
//! // Price it
//! let breakdown = pricing::quote(&product, &config);
//! println!("Unit price: {}", breakdown.unit_price);
//!
//! // Add to cart and total up
//! let mut cart = Cart::new(session_id);
//! cart.add_line(&product, config, 1)?;
//! let totals = cart.totals()?;
//! println!("Total: {}", totals.grand_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod pricing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Fabric, FabricCategory, LiftingMechanism, Product, ProductCategory, SizeOption,
    };

    // Pricing
    pub use crate::pricing::{self, Configuration, PriceBreakdown, SizeSelection};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotals, MAX_QUANTITY_PER_LINE};

    // Checkout
    pub use crate::checkout::{Address, Order, OrderItem, OrderStatus};
}
