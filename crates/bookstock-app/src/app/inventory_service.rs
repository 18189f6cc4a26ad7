//! Inventory Service - lookup, stocking, and circulation use cases
//!
//! Every operation follows the same cycle:
//! 1. Load the whole store
//! 2. Locate the record by id
//! 3. Read or mutate it
//! 4. Save the whole store, only if a counter changed

use std::path::Path;

use bookstock_domain::model::{
    BookRecord, BookSummary, BorrowOutcome, ReturnOutcome, SeedRow, StockChange, StockLine,
};
use bookstock_domain::repository::CatalogRepository;
use bookstock_domain::service::{self, generate_stock_report};
use bookstock_infra::seed_csv::load_seed_catalog;
use bookstock_types::{Error, Result};

/// Inventory operations over an injected catalog store
#[derive(Debug)]
pub struct InventoryService<R> {
    repo: R,
}

impl<R: CatalogRepository> InventoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Seed the store from in-memory rows. No-op when a store already exists.
    pub fn initialize_from_seed(&self, rows: Vec<SeedRow>) -> Result<Vec<BookRecord>> {
        let existed = self.repo.exists();
        let records = self.repo.initialize_from_seed(rows)?;
        if existed {
            tracing::info!(records = records.len(), "store already initialized; seed ignored");
        } else {
            tracing::info!(records = records.len(), "store initialized from seed");
        }
        Ok(records)
    }

    /// Seed the store from a CSV catalog file
    pub fn initialize_from_seed_file(&self, seed_path: &Path) -> Result<Vec<BookRecord>> {
        let rows = load_seed_catalog(seed_path)?;
        self.initialize_from_seed(rows)
    }

    /// Seed from `seed_path` only if no store exists yet.
    ///
    /// Returns `true` when seeding happened. The seed file is not touched
    /// once a store is present.
    pub fn ensure_initialized(&self, seed_path: &Path) -> Result<bool> {
        if self.repo.exists() {
            return Ok(false);
        }
        tracing::info!(seed = %seed_path.display(), "no store found, seeding");
        self.initialize_from_seed_file(seed_path)?;
        Ok(true)
    }

    pub fn lookup(&self, id: &str) -> Result<BookSummary> {
        let records = self.repo.load()?;
        service::find_record(&records, id)
            .map(BookRecord::summary)
            .ok_or_else(|| not_found(id))
    }

    /// Add `quantity` copies of a title; all of them are immediately lendable
    pub fn add_stock(&self, id: &str, quantity: u32) -> Result<StockChange> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity(
                "quantity must be a positive integer".to_string(),
            ));
        }
        let mut records = self.repo.load()?;
        let record = service::find_record_mut(&mut records, id).ok_or_else(|| not_found(id))?;
        let level = service::add_copies(record, quantity)?;
        let book = record.summary();

        self.repo.save(&records)?;
        tracing::info!(
            id,
            quantity,
            copies = level.copies,
            available = level.available,
            "stock added"
        );
        Ok(StockChange {
            book,
            quantity,
            level,
        })
    }

    pub fn borrow(&self, id: &str) -> Result<BorrowOutcome> {
        let mut records = self.repo.load()?;
        let record = service::find_record_mut(&mut records, id).ok_or_else(|| not_found(id))?;
        let outcome = service::borrow_copy(record);

        if outcome.changed_stock() {
            self.repo.save(&records)?;
            tracing::info!(id, available = outcome.level().available, "copy borrowed");
        } else {
            tracing::info!(id, "borrow refused: no copies available");
        }
        Ok(outcome)
    }

    pub fn return_copy(&self, id: &str) -> Result<ReturnOutcome> {
        let mut records = self.repo.load()?;
        let record = service::find_record_mut(&mut records, id).ok_or_else(|| not_found(id))?;
        let outcome = service::return_copy(record);

        if outcome.changed_stock() {
            self.repo.save(&records)?;
            tracing::info!(id, available = outcome.level().available, "copy returned");
        } else {
            tracing::info!(id, "return refused: no copies on loan");
        }
        Ok(outcome)
    }

    /// Every record in store order. Read-only.
    pub fn list_stock(&self) -> Result<Vec<StockLine>> {
        let records = self.repo.load()?;
        Ok(records.iter().map(StockLine::from).collect())
    }

    pub fn stock_report(&self) -> Result<String> {
        Ok(generate_stock_report(&self.list_stock()?))
    }
}

fn not_found(id: &str) -> Error {
    tracing::debug!(id, "book not found");
    Error::NotFound(id.to_string())
}
