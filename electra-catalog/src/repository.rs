use crate::catalog::Catalog;

/// Repository trait for catalog snapshot access
pub trait CatalogRepository: Send + Sync {
    /// Persist the whole catalog, overwriting any previous snapshot
    fn save(&self, catalog: &Catalog) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Restore the catalog from the last snapshot
    fn load(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>>;
}
