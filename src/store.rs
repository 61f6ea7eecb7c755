//! Flat-file record store.
//!
//! The whole collection lives in one comma-separated table with a
//! `name,purchase_date,expiry_date` header. Every save rewrites the table in
//! full through a temp file + rename, so readers never observe a half-written
//! table.

use crate::error::{FridgeError, Result};
use crate::types::{FoodRecord, COLUMNS};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default table location, relative to the working directory.
pub const DEFAULT_TABLE_PATH: &str = "fridge.csv";

/// Store configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the persisted table.
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TABLE_PATH),
        }
    }
}

/// Loads and saves the full record collection.
///
/// Holds no records itself; each call opens the table, does its work and
/// closes it again before returning.
#[derive(Clone, Debug)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Path of the persisted table.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Read every record, in file order.
    ///
    /// A missing or zero-length table is an empty inventory, not an error.
    pub fn load(&self) -> Result<Vec<FoodRecord>> {
        let path = self.path();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no table yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        Self::verify_header(reader.headers()?)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: FoodRecord = row?;
            records.push(record);
        }

        tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    /// Replace the table with `records`, in the order given.
    pub fn save(&self, records: &[FoodRecord]) -> Result<()> {
        let path = self.path();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(temp.as_file_mut());

            writer.write_record(COLUMNS)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        // Atomic rename
        temp.persist(path)?;

        tracing::debug!(path = %path.display(), count = records.len(), "saved records");
        Ok(())
    }

    fn verify_header(header: &csv::StringRecord) -> Result<()> {
        if header.iter().eq(COLUMNS.iter().copied()) {
            Ok(())
        } else {
            Err(FridgeError::InvalidFormat(format!(
                "expected header '{}', found '{}'",
                COLUMNS.join(","),
                header.iter().collect::<Vec<_>>().join(",")
            )))
        }
    }
}
