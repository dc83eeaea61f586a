use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::file::FileExportRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Where an export ended up, for user-facing acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportLocation {
    File(PathBuf),
    Memory,
}

impl fmt::Display for ExportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportLocation::File(path) => write!(f, "{}", path.display()),
            ExportLocation::Memory => write!(f, "memory"),
        }
    }
}

/// Repository contract for exported answer text.
#[async_trait]
pub trait ExportRepository: Send + Sync {
    /// Replace the stored export with `contents` in full.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the contents cannot be written.
    async fn write_export(&self, contents: &str) -> Result<ExportLocation, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    last: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent export, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn last_export(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .last
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    /// How many times an export has been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn write_count(&self) -> Result<usize, StorageError> {
        let guard = self
            .writes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }
}

#[async_trait]
impl ExportRepository for InMemoryRepository {
    async fn write_export(&self, contents: &str) -> Result<ExportLocation, StorageError> {
        let mut last = self
            .last
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *last = Some(contents.to_owned());
        *writes += 1;
        Ok(ExportLocation::Memory)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub exports: Arc<dyn ExportRepository>,
}

impl Storage {
    /// Exports go to a single file at `path`, overwritten on every write.
    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            exports: Arc::new(FileExportRepository::new(path)),
        }
    }
}
