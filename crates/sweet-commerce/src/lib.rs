//! Storefront domain types for the Sweet House bakery.
//!
//! This crate is the DOM-free state layer a presentation binds to
//! browser events:
//!
//! - **Cart**: session-scoped cart store with line items, derived
//!   totals, and change notifications
//! - **Catalog**: menu products, flat categories, category filtering
//! - **Money**: cents-based monetary values
//!
//! # Example
//!
//! ```
//! use sweet_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add_item("Brigadeiro", Money::from_decimal(3.5, Currency::BRL))?;
//! cart.add_item("Beijinho", Money::from_decimal(4.0, Currency::BRL))?;
//!
//! let snapshot = cart.snapshot();
//! assert_eq!(snapshot.total_item_count, 2);
//! assert_eq!(snapshot.total_amount.display(), "R$7.50");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{CartSnapshot, CartStore, LineItem};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};
}
