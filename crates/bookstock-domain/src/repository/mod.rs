//! Repository trait definitions for data persistence

use bookstock_types::Error;

use crate::model::{BookRecord, SeedRow};

/// Whole-store persistence for the book catalog
///
/// The store is always read and written as one unit. There is no locking:
/// two interleaved load/save cycles lose the earlier writer's update.
pub trait CatalogRepository {
    /// Whether a persisted store is present
    fn exists(&self) -> bool;

    /// Load every record, in insertion order
    fn load(&self) -> Result<Vec<BookRecord>, Error>;

    /// Replace the persisted store with `records`
    fn save(&self, records: &[BookRecord]) -> Result<(), Error>;

    /// Build and persist a fresh store from seed rows with zeroed counters.
    ///
    /// Does nothing when a store already exists; the existing records are
    /// returned unchanged and are never refreshed from the seed.
    fn initialize_from_seed(&self, rows: Vec<SeedRow>) -> Result<Vec<BookRecord>, Error> {
        if self.exists() {
            return self.load();
        }
        let records: Vec<BookRecord> = rows.into_iter().map(BookRecord::from_seed).collect();
        self.save(&records)?;
        Ok(records)
    }
}
