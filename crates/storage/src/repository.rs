use std::sync::{Arc, Mutex};
use thiserror::Error;

use quiz_core::model::PerformanceRecord;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed performance data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
}

/// Durable home for the performance record.
///
/// Implementations read and write the record wholesale: `load` parses the
/// entire snapshot, `save` overwrites it. There is no incremental update and
/// no retry; callers see every failure.
pub trait PerformanceRepository: Send + Sync {
    /// Reads the whole record, returning an empty one when nothing has been
    /// saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Parse` for malformed content and
    /// `StorageError::Io` for read failures. Malformed content is never
    /// repaired; an operator must fix or delete the snapshot.
    fn load(&self) -> Result<PerformanceRecord, StorageError>;

    /// Overwrites the stored snapshot with `record`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the snapshot cannot be written.
    fn save(&self, record: &PerformanceRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    record: Arc<Mutex<PerformanceRecord>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PerformanceRepository for InMemoryRepository {
    fn load(&self) -> Result<PerformanceRecord, StorageError> {
        let guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, record: &PerformanceRecord) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = record.clone();
        Ok(())
    }
}
