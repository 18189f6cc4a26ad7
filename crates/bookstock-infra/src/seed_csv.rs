//! CSV loader for the seed catalog
//!
//! Expected columns: id, title, author, year. The header row is optional;
//! the stock `catalog.csv` ships without one.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use bookstock_domain::model::SeedRow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedLoaderError {
    #[error("Failed to read seed catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected 4 columns (id, title, author, year), found {found}")]
    MissingColumns { row: usize, found: usize },

    #[error("Row {row}: invalid year '{value}'")]
    InvalidYear { row: usize, value: String },

    #[error("Row {row}: empty id")]
    EmptyId { row: usize },
}

impl From<SeedLoaderError> for bookstock_types::Error {
    fn from(err: SeedLoaderError) -> Self {
        bookstock_types::Error::Seed(err.to_string())
    }
}

/// Load seed rows from a CSV file on disk
pub fn load_seed_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<SeedRow>, SeedLoaderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SeedLoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let rows = parse_seed_catalog(content.as_bytes())?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded seed catalog");
    Ok(rows)
}

/// Parse seed rows from any CSV reader
pub fn parse_seed_catalog<R: Read>(input: R) -> Result<Vec<SeedRow>, SeedLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 1;

        if row_idx == 0 && is_header(&record) {
            continue;
        }
        rows.push(parse_record(&record, row_num)?);
    }
    Ok(rows)
}

fn is_header(record: &csv::StringRecord) -> bool {
    let first = record.get(0).unwrap_or_default().to_lowercase();
    let year_is_number = record
        .get(3)
        .map(|y| y.parse::<i32>().is_ok())
        .unwrap_or(false);
    !year_is_number && (first == "id" || first.contains("isbn"))
}

fn parse_record(record: &csv::StringRecord, row: usize) -> Result<SeedRow, SeedLoaderError> {
    if record.len() < 4 {
        return Err(SeedLoaderError::MissingColumns {
            row,
            found: record.len(),
        });
    }
    let field = |i: usize| record.get(i).unwrap_or_default().to_string();

    let id = field(0);
    if id.is_empty() {
        return Err(SeedLoaderError::EmptyId { row });
    }
    let year_raw = field(3);
    let year = year_raw
        .parse::<i32>()
        .map_err(|_| SeedLoaderError::InvalidYear {
            row,
            value: year_raw.clone(),
        })?;

    Ok(SeedRow {
        id,
        title: field(1),
        author: field(2),
        year,
    })
}
