//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::selector::SelectorError;
use storage::repository::StorageError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
