//! Shared error types for the services crate.

use thiserror::Error;

use omr_core::model::{QuestionCountError, SheetError};
use storage::repository::StorageError;

/// Errors emitted by `SheetService` and `SheetSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetServiceError {
    #[error(transparent)]
    QuestionCount(#[from] QuestionCountError),
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
