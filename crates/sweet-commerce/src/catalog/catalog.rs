//! The catalog container and its queries.

use crate::catalog::{CategoryFilter, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An ordered collection of menu products.
///
/// Order is display order; filtering preserves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the menu.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Look up the price of a product by name.
    ///
    /// This is the price source for add-to-cart callers: the cart
    /// store requires an explicit price, and the catalog is where one
    /// comes from. An unknown name yields `None` rather than any
    /// fallback price.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.unit_price)
    }

    /// Products passing the given category filter, in display order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(&p.category_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Currency;

    fn sample_catalog() -> (Catalog, Category, Category) {
        let doces = Category::new("Doces", "doces");
        let bolos = Category::new("Bolos", "bolos");

        let mut catalog = Catalog::new();
        catalog.add(Product::new(
            "Brigadeiro",
            "brigadeiro",
            doces.id.clone(),
            Money::from_decimal(3.5, Currency::BRL),
        ));
        catalog.add(Product::new(
            "Beijinho",
            "beijinho",
            doces.id.clone(),
            Money::from_decimal(4.0, Currency::BRL),
        ));
        catalog.add(Product::new(
            "Bolo de Cenoura",
            "bolo-de-cenoura",
            bolos.id.clone(),
            Money::from_decimal(45.0, Currency::BRL),
        ));

        (catalog, doces, bolos)
    }

    #[test]
    fn test_filter_all_shows_everything() {
        let (catalog, _, _) = sample_catalog();
        let visible = catalog.filter(&CategoryFilter::All);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let (catalog, doces, _) = sample_catalog();
        let visible = catalog.filter(&CategoryFilter::Category(doces.id));

        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "Brigadeiro");
        assert_eq!(visible[1].name, "Beijinho");
    }

    #[test]
    fn test_filter_empty_category() {
        let (catalog, _, _) = sample_catalog();
        let visible = catalog.filter(&CategoryFilter::category("salgados"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_price_of() {
        let (catalog, _, _) = sample_catalog();

        assert_eq!(
            catalog.price_of("Beijinho"),
            Some(Money::from_decimal(4.0, Currency::BRL))
        );
        assert_eq!(catalog.price_of("Pudim"), None);
    }

    #[test]
    fn test_find_by_slug() {
        let (catalog, _, _) = sample_catalog();

        assert!(catalog.find_by_slug("bolo-de-cenoura").is_some());
        assert!(catalog.find_by_slug("missing").is_none());
    }
}
