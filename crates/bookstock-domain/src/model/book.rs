//! Book catalog record type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the external seed catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Persisted catalog entry with its stock counters
///
/// `available` never exceeds `copies`; the circulation service is the only
/// code that moves either counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// ISBN-like catalog identifier
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Total copies owned
    pub copies: u32,
    /// Copies currently on the shelf
    pub available: u32,
}

impl BookRecord {
    /// Create an unstocked record from a seed row
    pub fn from_seed(row: SeedRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            year: row.year,
            copies: 0,
            available: 0,
        }
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
        }
    }

    pub fn level(&self) -> StockLevel {
        StockLevel {
            copies: self.copies,
            available: self.available,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.available <= self.copies
    }
}

/// Catalog identity of a book, without stock counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, by {} ({})", self.title, self.author, self.year)
    }
}

/// Snapshot of a record's `(copies, available)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub copies: u32,
    pub available: u32,
}

/// One line of the stock listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    #[serde(flatten)]
    pub book: BookSummary,
    pub copies: u32,
    pub available: u32,
}

impl From<&BookRecord> for StockLine {
    fn from(record: &BookRecord) -> Self {
        Self {
            book: record.summary(),
            copies: record.copies,
            available: record.available,
        }
    }
}

impl fmt::Display for StockLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}: {} available, of {} copies",
            self.book.id, self.book, self.available, self.copies
        )
    }
}
