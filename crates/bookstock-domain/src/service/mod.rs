//! Domain services

pub mod circulation;
pub mod stock_report;

pub use circulation::{add_copies, borrow_copy, find_record, find_record_mut, return_copy};
pub use stock_report::{generate_stock_report, StockTotals};
