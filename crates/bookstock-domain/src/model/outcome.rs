//! Results of the mutating inventory operations
//!
//! `Unavailable` and `OverReturn` are ordinary business states, not errors:
//! the call succeeds and reports that nothing changed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::book::{BookSummary, StockLevel};

/// Result of adding copies to a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub book: BookSummary,
    pub quantity: u32,
    pub level: StockLevel,
}

impl fmt::Display for StockChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has been added to stock. Current stock: {}, available: {}",
            self.book.title, self.level.copies, self.level.available
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BorrowOutcome {
    Borrowed { book: BookSummary, level: StockLevel },
    Unavailable { book: BookSummary, level: StockLevel },
}

impl BorrowOutcome {
    pub fn level(&self) -> StockLevel {
        match self {
            BorrowOutcome::Borrowed { level, .. } | BorrowOutcome::Unavailable { level, .. } => {
                *level
            }
        }
    }

    /// Whether a copy actually left the shelf
    pub fn changed_stock(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed { .. })
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorrowOutcome::Borrowed { book, level } => write!(
                f,
                "{} is borrowed. Available: {}, Copies: {}",
                book.title, level.available, level.copies
            ),
            BorrowOutcome::Unavailable { book, .. } => write!(f, "{} is not available", book.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    Returned { book: BookSummary, level: StockLevel },
    /// Every owned copy is already on the shelf
    OverReturn { book: BookSummary, level: StockLevel },
}

impl ReturnOutcome {
    pub fn level(&self) -> StockLevel {
        match self {
            ReturnOutcome::Returned { level, .. } | ReturnOutcome::OverReturn { level, .. } => {
                *level
            }
        }
    }

    pub fn changed_stock(&self) -> bool {
        matches!(self, ReturnOutcome::Returned { .. })
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { book, level } => write!(
                f,
                "{} is returned to library. Available: {}, Copies: {}",
                book.title, level.available, level.copies
            ),
            ReturnOutcome::OverReturn { .. } => write!(
                f,
                "All books are already returned. You can not return more than borrowed."
            ),
        }
    }
}
