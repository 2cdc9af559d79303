//! Roster error types

use crate::storage::StorageError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors returned by roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    /// The submitted form failed a field rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record carries the given id
    #[error("Student record not found: {0}")]
    NotFound(String),

    /// The durable slot rejected the write; the in-memory change was rolled back
    #[error("Failed to persist roster: {0}")]
    PersistFailed(#[from] StorageError),
}

impl RosterError {
    /// Stable machine-readable identifier for this error
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::Validation(e) => e.code(),
            RosterError::NotFound(_) => "not_found",
            RosterError::PersistFailed(_) => "persist_failed",
        }
    }
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
