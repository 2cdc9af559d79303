//! CLI command implementations

pub mod list;
pub mod records;

use crate::cli::error::CliError;
use crate::config::RosterConfig;
use crate::roster::{RosterSession, RosterStore};
use crate::storage::filesystem::FileSystemStorageBackend;
use std::io::{BufRead, Write};

pub use list::{ListFormat, handle_list, handle_show};
pub use records::{UpdateArgs, handle_add, handle_clear, handle_delete, handle_update};

/// Session over the file system roster described by `config`
pub type CliSession = RosterSession<FileSystemStorageBackend>;

/// Open the roster named by `config`
pub fn open_session(config: &RosterConfig) -> CliSession {
    let backend = FileSystemStorageBackend::new(&config.data_dir);
    RosterSession::new(RosterStore::load(backend, config.storage_key.clone()))
}

/// Ask a yes/no question on stderr, reading the answer from `input`.
///
/// Anything other than `y`/`yes` (any case) is a no.
pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool, CliError> {
    eprint!("{} [y/N] ", prompt);
    std::io::stderr()
        .flush()
        .map_err(|e| CliError::IoError(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| CliError::IoError(format!("Failed to read confirmation: {}", e)))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_answers() {
        assert!(confirm("Delete?", &mut Cursor::new("y\n")).unwrap());
        assert!(confirm("Delete?", &mut Cursor::new("YES\n")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("\n")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("nope\n")).unwrap());
    }
}
