//! Repository adapters for persistence layer

use std::path::PathBuf;

use bookstock_infra::persistence::FileCatalogRepository;
use bookstock_types::Result;

use crate::app::InventoryService;
use crate::config::Config;

/// Open the file-based catalog store named by the config
pub fn open_catalog_repo(config: &Config) -> Result<FileCatalogRepository> {
    Ok(FileCatalogRepository::new(config.store_path()?))
}

/// Open the catalog store at a custom path
pub fn open_catalog_repo_at(store_path: PathBuf) -> FileCatalogRepository {
    FileCatalogRepository::new(store_path)
}

/// Inventory service over the configured file store
pub fn open_inventory(config: &Config) -> Result<InventoryService<FileCatalogRepository>> {
    Ok(InventoryService::new(open_catalog_repo(config)?))
}
