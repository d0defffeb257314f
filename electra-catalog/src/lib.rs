pub mod brand;
pub mod item;
pub mod catalog;
pub mod repository;

pub use brand::Brand;
pub use catalog::{Catalog, CatalogError, ItemSummary};
pub use item::{Item, ItemKind};
pub use repository::CatalogRepository;
