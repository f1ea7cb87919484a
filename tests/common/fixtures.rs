//! Test fixture creation for the catalog database

use album_inventory_server::catalog_store::{CatalogStore, SqliteCatalogStore};
use album_inventory_server::seed::seed_catalog;
use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;

/// Creates a temporary catalog holding the seeded albums.
/// Returns (temp_dir, store); the database lives in temp_dir.
pub fn create_seeded_catalog() -> Result<(TempDir, Arc<dyn CatalogStore>)> {
    let dir = TempDir::new()?;
    let store: Arc<dyn CatalogStore> =
        Arc::new(SqliteCatalogStore::new(dir.path().join("catalog.db"))?);
    seed_catalog(store.clone())?;
    Ok((dir, store))
}
