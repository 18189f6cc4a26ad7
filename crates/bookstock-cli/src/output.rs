//! Output formatting module

use std::fmt::Display;

use bookstock_domain::model::StockLine;
use bookstock_domain::service::{generate_stock_report, StockTotals};
use bookstock_types::{OutputFormat, Result};
use serde::Serialize;
use serde_json::json;

/// Print a single result as JSON or as its human-readable message
pub fn output_result<T: Serialize + Display>(
    output_format: OutputFormat,
    result: &T,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

pub fn output_stock(output_format: OutputFormat, lines: &[StockLine]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let body = json!({
            "books": lines,
            "totals": StockTotals::from_lines(lines),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", generate_stock_report(lines));
    }
    Ok(())
}

/// Unknown ids are reported, not treated as failures
pub fn output_not_found(output_format: OutputFormat, id: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let body = json!({ "outcome": "not_found", "id": id });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("Book not found");
    }
    Ok(())
}
