//! Unified error handling
//!
//! Provides a consistent error taxonomy across the service layer and the
//! shared directory state.

use thiserror::Error;

use crate::domain::validation::FieldErrors;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum Error {
    /// An update addressed an id that is not in the collection. Delete is
    /// deliberately exempt; removing an absent id is a no-op.
    #[error("Profile not found: {0}")]
    NotFound(i64),

    /// Form-boundary rejection, with per-field messages.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The persistence adapter failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound(id)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
