//! JSON-file-backed performance storage.
//!
//! The record lives in a single UTF-8 JSON object mapping item codes to
//! counters, read and rewritten wholesale on every save. Writes go through a
//! sibling temp file plus a rename so an interrupted write never leaves a
//! torn snapshot behind.

use std::fs;
use std::path::{Path, PathBuf};

use quiz_core::model::PerformanceRecord;

use crate::repository::{PerformanceRepository, StorageError};

/// Path-addressed repository persisting the record as one JSON file.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl PerformanceRepository for JsonFileRepository {
    fn load(&self) -> Result<PerformanceRecord, StorageError> {
        if !self.path.exists() {
            return Ok(PerformanceRecord::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    fn save(&self, record: &PerformanceRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
