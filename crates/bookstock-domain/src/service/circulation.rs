//! Circulation rules for a single book record
//!
//! Each record moves through `(copies, available)` states:
//! - add `q > 0`: `(c, a) -> (c + q, a + q)`
//! - borrow: `(c, a) -> (c, a - 1)` only when `a > 0`
//! - return: `(c, a) -> (c, a + 1)` only when `a < c`
//!
//! `0 <= available <= copies` holds before and after every transition.

use bookstock_types::Error;

use crate::model::{BookRecord, BorrowOutcome, ReturnOutcome, StockLevel};

pub fn find_record<'a>(records: &'a [BookRecord], id: &str) -> Option<&'a BookRecord> {
    records.iter().find(|r| r.id == id)
}

pub fn find_record_mut<'a>(records: &'a mut [BookRecord], id: &str) -> Option<&'a mut BookRecord> {
    records.iter_mut().find(|r| r.id == id)
}

/// Add `quantity` copies, all of them immediately lendable
pub fn add_copies(record: &mut BookRecord, quantity: u32) -> Result<StockLevel, Error> {
    if quantity == 0 {
        return Err(Error::InvalidQuantity(
            "quantity must be a positive integer".to_string(),
        ));
    }
    let copies = record.copies.checked_add(quantity);
    let available = record.available.checked_add(quantity);
    match (copies, available) {
        (Some(copies), Some(available)) => {
            record.copies = copies;
            record.available = available;
            Ok(record.level())
        }
        _ => Err(Error::InvalidQuantity(format!(
            "adding {} copies of {} overflows the stock counter",
            quantity, record.id
        ))),
    }
}

pub fn borrow_copy(record: &mut BookRecord) -> BorrowOutcome {
    if record.available == 0 {
        return BorrowOutcome::Unavailable {
            book: record.summary(),
            level: record.level(),
        };
    }
    record.available -= 1;
    BorrowOutcome::Borrowed {
        book: record.summary(),
        level: record.level(),
    }
}

pub fn return_copy(record: &mut BookRecord) -> ReturnOutcome {
    if record.available >= record.copies {
        return ReturnOutcome::OverReturn {
            book: record.summary(),
            level: record.level(),
        };
    }
    record.available += 1;
    ReturnOutcome::Returned {
        book: record.summary(),
        level: record.level(),
    }
}
