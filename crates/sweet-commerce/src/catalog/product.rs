//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product on the bakery menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name, unique within the catalog.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Short description for listings.
    pub description: Option<String>,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Unit price.
    pub unit_price: Money,
}

impl Product {
    /// Create a new product.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        category_id: CategoryId,
        unit_price: Money,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            category_id,
            unit_price,
        }
    }

    /// Set the listing description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
