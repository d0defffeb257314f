use crate::brand::Brand;
use crate::item::Item;

/// Per-variant item totals, reported after a full listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemSummary {
    pub televisions: usize,
    pub mobiles: usize,
}

/// In-memory catalog of brands and items. Holds no I/O and no global state;
/// the interactive loop and the snapshot store both drive it through this API.
///
/// Invariants: brand names are unique under case-insensitive comparison, and
/// every item's brand name resolves to a registered brand. Both are enforced
/// at insertion time; brands are never removed, so they cannot break later.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brands: Vec<Brand>,
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a brand. Duplicate names (any case variant) are rejected and
    /// the collection is left unchanged.
    pub fn add_brand(&mut self, brand: Brand) -> Result<(), CatalogError> {
        if self.find_brand(&brand.name).is_some() {
            return Err(CatalogError::DuplicateBrand(brand.name));
        }
        tracing::debug!(brand = %brand.name, "brand registered");
        self.brands.push(brand);
        Ok(())
    }

    /// Case-insensitive exact-name lookup, linear scan, first match wins
    pub fn find_brand(&self, name: &str) -> Option<&Brand> {
        self.brands.iter().find(|brand| brand.matches_name(name))
    }

    /// Register an item. The caller is expected to have resolved the brand
    /// already; the catalog re-checks before committing.
    pub fn add_item(&mut self, item: Item) -> Result<(), CatalogError> {
        if self.find_brand(&item.brand_name).is_none() {
            return Err(CatalogError::UnknownBrand(item.brand_name));
        }
        tracing::debug!(item = %item.name, brand = %item.brand_name, "item registered");
        self.items.push(item);
        Ok(())
    }

    /// Brands sorted by revenue, highest first. The sort is stable, so ties
    /// keep insertion order.
    pub fn brands_by_revenue(&self) -> Vec<&Brand> {
        let mut sorted: Vec<&Brand> = self.brands.iter().collect();
        sorted.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        sorted
    }

    /// Items in listing order: brand name, then price, then item name
    pub fn items_in_listing_order(&self) -> Vec<&Item> {
        let mut sorted: Vec<&Item> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.listing_cmp(b));
        sorted
    }

    /// Variant totals over the whole item collection, independent of any sort
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            televisions: self.items.iter().filter(|i| i.is_television()).count(),
            mobiles: self.items.iter().filter(|i| i.is_mobile()).count(),
        }
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.items.is_empty()
    }

    /// Rebuild a catalog from persisted collections by replaying the checked
    /// insertion ops, so both invariants hold again after a reload.
    pub fn from_parts(brands: Vec<Brand>, items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for brand in brands {
            catalog.add_brand(brand)?;
        }
        for item in items {
            catalog.add_item(item)?;
        }
        Ok(catalog)
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Brand already exists: {0}")]
    DuplicateBrand(String),

    #[error("Brand not found: {0}. Add the brand first")]
    UnknownBrand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str, country: &str, revenue: f64) -> Brand {
        Brand::new(name.to_string(), country.to_string(), revenue)
    }

    fn television(name: &str, brand: &str, price: f64) -> Item {
        Item::television(
            name.to_string(),
            brand.to_string(),
            price,
            55,
            "OLED".to_string(),
        )
    }

    fn mobile(name: &str, brand: &str, price: f64) -> Item {
        Item::mobile(
            name.to_string(),
            brand.to_string(),
            price,
            8,
            "Android".to_string(),
        )
    }

    #[test]
    fn test_duplicate_brand_rejected_any_case() {
        let mut catalog = Catalog::new();

        catalog.add_brand(brand("Acme", "US", 1000.0)).unwrap();
        let err = catalog.add_brand(brand("ACME", "US", 500.0)).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateBrand(name) if name == "ACME"));
        assert_eq!(catalog.brands().len(), 1);
        assert_eq!(catalog.brands()[0].name, "Acme");
    }

    #[test]
    fn test_find_brand_ignores_case() {
        let mut catalog = Catalog::new();
        catalog.add_brand(brand("Acme", "US", 1000.0)).unwrap();

        assert_eq!(catalog.find_brand("acme").unwrap().name, "Acme");
        assert!(catalog.find_brand("Zed").is_none());
    }

    #[test]
    fn test_add_item_requires_registered_brand() {
        let mut catalog = Catalog::new();

        let err = catalog.add_item(television("T1", "Acme", 300.0)).unwrap_err();

        assert!(matches!(err, CatalogError::UnknownBrand(name) if name == "Acme"));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_add_item_grows_collection_by_one() {
        let mut catalog = Catalog::new();
        catalog.add_brand(brand("Acme", "US", 1000.0)).unwrap();

        catalog.add_item(television("T1", "Acme", 300.0)).unwrap();

        assert_eq!(catalog.items().len(), 1);
    }

    #[test]
    fn test_brands_listed_by_revenue_descending() {
        let mut catalog = Catalog::new();
        catalog.add_brand(brand("Acme", "US", 1000.0)).unwrap();
        catalog.add_brand(brand("Zed", "UK", 2000.0)).unwrap();

        let listed = catalog.brands_by_revenue();

        assert_eq!(listed[0].name, "Zed");
        assert_eq!(listed[1].name, "Acme");
    }

    #[test]
    fn test_revenue_ties_keep_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add_brand(brand("Beta", "DE", 1000.0)).unwrap();
        catalog.add_brand(brand("Alpha", "FR", 1000.0)).unwrap();

        let listed = catalog.brands_by_revenue();

        assert_eq!(listed[0].name, "Beta");
        assert_eq!(listed[1].name, "Alpha");
    }

    #[test]
    fn test_items_listed_by_brand_price_name() {
        let mut catalog = Catalog::new();
        catalog.add_brand(brand("Acme", "US", 1000.0)).unwrap();
        catalog.add_brand(brand("Zed", "UK", 2000.0)).unwrap();
        catalog.add_item(television("Z9", "Zed", 100.0)).unwrap();
        catalog.add_item(television("T1", "Acme", 300.0)).unwrap();
        catalog.add_item(mobile("M1", "Acme", 300.0)).unwrap();
        catalog.add_item(television("T2", "Acme", 150.0)).unwrap();

        let listed: Vec<&str> = catalog
            .items_in_listing_order()
            .iter()
            .map(|item| item.name.as_str())
            .collect();

        // Acme before Zed; within Acme, price ascending; M1 before T1 on the
        // brand+price tie
        assert_eq!(listed, vec!["T2", "M1", "T1", "Z9"]);
    }

    #[test]
    fn test_summary_counts_variants() {
        let mut catalog = Catalog::new();
        catalog.add_brand(brand("Acme", "US", 1000.0)).unwrap();
        catalog.add_item(television("T1", "Acme", 300.0)).unwrap();
        catalog.add_item(mobile("M1", "Acme", 300.0)).unwrap();
        catalog.add_item(mobile("M2", "Acme", 400.0)).unwrap();

        let summary = catalog.summary();

        assert_eq!(summary.televisions, 1);
        assert_eq!(summary.mobiles, 2);
    }

    #[test]
    fn test_summary_of_empty_catalog_is_zero() {
        assert_eq!(Catalog::new().summary(), ItemSummary::default());
    }

    #[test]
    fn test_from_parts_restores_collections_in_order() {
        let brands = vec![brand("Acme", "US", 1000.0), brand("Zed", "UK", 2000.0)];
        let items = vec![television("T1", "Acme", 300.0), mobile("M1", "Zed", 200.0)];

        let catalog = Catalog::from_parts(brands.clone(), items.clone()).unwrap();

        assert_eq!(catalog.brands(), brands.as_slice());
        assert_eq!(catalog.items(), items.as_slice());
    }

    #[test]
    fn test_from_parts_rejects_dangling_brand_reference() {
        let items = vec![television("T1", "Ghost", 300.0)];

        let err = Catalog::from_parts(Vec::new(), items).unwrap_err();

        assert!(matches!(err, CatalogError::UnknownBrand(name) if name == "Ghost"));
    }
}
