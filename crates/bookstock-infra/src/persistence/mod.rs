//! Persistence implementations
//!
//! This module provides implementations of the `CatalogRepository` trait.

mod file_catalog_repo;
mod memory_catalog_repo;

pub use file_catalog_repo::{FileCatalogRepository, DEFAULT_STORE_FILE};
pub use memory_catalog_repo::MemoryCatalogRepository;
