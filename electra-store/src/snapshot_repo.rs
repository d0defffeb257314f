use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use electra_catalog::{Brand, Catalog, CatalogError, CatalogRepository, Item};

/// File-backed catalog snapshot: the brand collection followed by the item
/// collection, written as two sequential bincode aggregates. No header and no
/// version field; a save/load round trip is the only format contract.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the snapshot file with the current collections
    pub fn save_snapshot(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, catalog.brands())?;
        bincode::serialize_into(&mut writer, catalog.items())?;
        writer.flush()?;
        tracing::info!(
            path = %self.path.display(),
            brands = catalog.brands().len(),
            items = catalog.items().len(),
            "catalog snapshot written"
        );
        Ok(())
    }

    /// Read the two collections back in write order and re-link items to
    /// brands through the catalog's checked insertion path
    pub fn load_snapshot(&self) -> Result<Catalog, StoreError> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        let brands: Vec<Brand> = bincode::deserialize_from(&mut reader)?;
        let items: Vec<Item> = bincode::deserialize_from(&mut reader)?;
        let catalog = Catalog::from_parts(brands, items)?;
        tracing::info!(
            path = %self.path.display(),
            brands = catalog.brands().len(),
            items = catalog.items().len(),
            "catalog snapshot loaded"
        );
        Ok(catalog)
    }
}

impl CatalogRepository for FileSnapshotRepository {
    fn save(&self, catalog: &Catalog) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.save_snapshot(catalog)?)
    }

    fn load(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.load_snapshot()?)
    }
}

/// Snapshot-related errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("Snapshot is inconsistent: {0}")]
    Snapshot(#[from] CatalogError),
}
