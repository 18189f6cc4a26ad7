//! Stock report rendering

use serde::{Deserialize, Serialize};

use crate::model::StockLine;

/// Aggregate counters across the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTotals {
    pub titles: usize,
    pub copies: u64,
    pub available: u64,
    pub on_loan: u64,
}

impl StockTotals {
    pub fn from_lines(lines: &[StockLine]) -> Self {
        lines.iter().fold(Self::default(), |mut acc, line| {
            acc.titles += 1;
            acc.copies += u64::from(line.copies);
            acc.available += u64::from(line.available);
            acc.on_loan += u64::from(line.copies.saturating_sub(line.available));
            acc
        })
    }
}

pub fn generate_stock_report(lines: &[StockLine]) -> String {
    let totals = StockTotals::from_lines(lines);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                   Stock Report                   \n");
    report.push_str("==================================================\n\n");

    if lines.is_empty() {
        report.push_str("  (catalog is empty)\n\n");
    } else {
        for line in lines {
            report.push_str(&format!("  {}\n", line));
        }
        report.push('\n');
    }

    report.push_str("[Summary]\n");
    report.push_str(&format!("  Titles:          {}\n", totals.titles));
    report.push_str(&format!("  Total copies:    {}\n", totals.copies));
    report.push_str(&format!("  Available:       {}\n", totals.available));
    report.push_str(&format!("  On loan:         {}\n", totals.on_loan));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookSummary;

    fn line(id: &str, copies: u32, available: u32) -> StockLine {
        StockLine {
            book: BookSummary {
                id: id.to_string(),
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                year: 1965,
            },
            copies,
            available,
        }
    }

    #[test]
    fn test_totals() {
        let totals = StockTotals::from_lines(&[line("a", 3, 2), line("b", 1, 0), line("c", 0, 0)]);
        assert_eq!(totals.titles, 3);
        assert_eq!(totals.copies, 4);
        assert_eq!(totals.available, 2);
        assert_eq!(totals.on_loan, 2);
    }

    #[test]
    fn test_report_lists_every_line_in_order() {
        let report = generate_stock_report(&[line("first", 1, 1), line("second", 2, 0)]);
        let first = report.find("first, Dune").unwrap();
        let second = report.find("second, Dune").unwrap();
        assert!(first < second);
        assert!(report.contains("On loan:         2"));
    }

    #[test]
    fn test_report_on_empty_catalog() {
        let report = generate_stock_report(&[]);
        assert!(report.contains("(catalog is empty)"));
        assert!(report.contains("Titles:          0"));
    }
}
