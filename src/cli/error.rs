//! CLI error type

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::roster::RosterError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No student with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    IoError(String),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidArgument(_) | CliError::Config(_) => 2,
            CliError::Roster(RosterError::Validation(_)) => 3,
            CliError::NotFound(_) | CliError::Roster(RosterError::NotFound(_)) => 4,
            _ => 1,
        }
    }
}
