//! In-memory implementation of CatalogRepository, for tests

use std::cell::{Cell, RefCell};

use bookstock_domain::model::BookRecord;
use bookstock_domain::repository::CatalogRepository;
use bookstock_types::{Error, StorageError};

#[derive(Debug, Default)]
pub struct MemoryCatalogRepository {
    records: RefCell<Option<Vec<BookRecord>>>,
    saves: Cell<usize>,
}

impl MemoryCatalogRepository {
    /// Empty repository with no store yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `records`
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            records: RefCell::new(Some(records)),
            saves: Cell::new(0),
        }
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Option<Vec<BookRecord>> {
        self.records.borrow().clone()
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    fn exists(&self) -> bool {
        self.records.borrow().is_some()
    }

    fn load(&self) -> Result<Vec<BookRecord>, Error> {
        self.records
            .borrow()
            .clone()
            .ok_or_else(|| StorageError::Missing("<memory>".into()).into())
    }

    fn save(&self, records: &[BookRecord]) -> Result<(), Error> {
        *self.records.borrow_mut() = Some(records.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
