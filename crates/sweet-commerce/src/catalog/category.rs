//! Category types for the product menu.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A menu category.
///
/// The bakery menu is flat; there is no category hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
}

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// A filter over menu categories.
///
/// `All` matches every product (the menu's "show everything" button);
/// `Category` matches products in that category only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CategoryFilter {
    /// Match every product.
    All,
    /// Match products in a single category.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Create a single-category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        CategoryFilter::Category(id.into())
    }

    /// Check whether a product in `category_id` passes this filter.
    pub fn matches(&self, category_id: &CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => id == category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        let filter = CategoryFilter::All;
        assert!(filter.matches(&CategoryId::new("doces")));
        assert!(filter.matches(&CategoryId::new("bolos")));
    }

    #[test]
    fn test_category_matches_only_itself() {
        let filter = CategoryFilter::category("doces");
        assert!(filter.matches(&CategoryId::new("doces")));
        assert!(!filter.matches(&CategoryId::new("bolos")));
    }
}
