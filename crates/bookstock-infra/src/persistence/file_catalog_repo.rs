//! File-based implementation of CatalogRepository

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bookstock_domain::model::BookRecord;
use bookstock_domain::repository::CatalogRepository;
use bookstock_types::{Error, StorageError};
use tempfile::NamedTempFile;

/// File name used when only a store directory is given
pub const DEFAULT_STORE_FILE: &str = "bookStock.json";

/// File-based catalog store
///
/// Stores the whole catalog as one JSON array. Saves go through a temporary
/// file in the same directory followed by a rename, so a reader never sees
/// a half-written store.
#[derive(Debug, Clone)]
pub struct FileCatalogRepository {
    store_path: PathBuf,
}

impl FileCatalogRepository {
    /// Use the store file at `store_path`. Nothing is read until `load`.
    pub fn new(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Use `bookStock.json` inside `store_dir`
    pub fn in_dir(store_dir: &Path) -> Self {
        Self::new(store_dir.join(DEFAULT_STORE_FILE))
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        StorageError::Write {
            path: self.store_path.clone(),
            source,
        }
        .into()
    }

    /// I/O failures while streaming JSON are write failures, not bad data
    fn serialize_error(&self, err: serde_json::Error) -> Error {
        if err.is_io() {
            self.write_error(err.into())
        } else {
            Error::Json(err)
        }
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn exists(&self) -> bool {
        self.store_path.is_file()
    }

    fn load(&self) -> Result<Vec<BookRecord>, Error> {
        if !self.exists() {
            return Err(StorageError::Missing(self.store_path.clone()).into());
        }
        let content = fs::read_to_string(&self.store_path).map_err(|source| StorageError::Read {
            path: self.store_path.clone(),
            source,
        })?;
        let records: Vec<BookRecord> =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                path: self.store_path.clone(),
                reason: e.to_string(),
            })?;
        if let Some(bad) = records.iter().find(|r| !r.is_consistent()) {
            return Err(StorageError::Corrupt {
                path: self.store_path.clone(),
                reason: format!(
                    "record {}: available {} exceeds copies {}",
                    bad.id, bad.available, bad.copies
                ),
            }
            .into());
        }
        tracing::debug!(path = %self.store_path.display(), records = records.len(), "loaded store");
        Ok(records)
    }

    fn save(&self, records: &[BookRecord]) -> Result<(), Error> {
        let dir = match self.store_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.write_error(e))?;

        let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| self.write_error(e))?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, records)
                .map_err(|e| self.serialize_error(e))?;
            writer.flush().map_err(|e| self.write_error(e))?;
        }
        temp_file
            .persist(&self.store_path)
            .map_err(|e| self.write_error(e.error))?;

        tracing::debug!(path = %self.store_path.display(), records = records.len(), "saved store");
        Ok(())
    }
}
