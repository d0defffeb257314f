pub mod app_config;
pub mod snapshot_repo;

pub use snapshot_repo::{FileSnapshotRepository, StoreError};
