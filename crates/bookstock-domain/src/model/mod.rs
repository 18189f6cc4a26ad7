//! Domain model types

pub mod book;
pub mod outcome;

pub use book::{BookRecord, BookSummary, SeedRow, StockLevel, StockLine};
pub use outcome::{BorrowOutcome, ReturnOutcome, StockChange};
