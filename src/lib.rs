//! Student Roster - validated student records mirrored to a key-value slot
//!
//! Provides:
//! - Student record models
//! - Ordered field validation and HTML escaping
//! - Storage backends (memory, file system, browser localStorage)
//! - The roster store and an edit/search session on top of it
//! - HTML and JSON export of record sets
//! - Configuration for front ends

pub mod config;
pub mod export;
pub mod models;
pub mod roster;
pub mod storage;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use storage::{MemoryStorageBackend, StorageBackend, StorageError};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use storage::browser::BrowserStorageBackend;

pub use config::{ConfigError, RosterConfig};
pub use export::{ExportError, HtmlTableExporter};
pub use models::{Student, StudentFields, StudentForm};
pub use roster::{
    DEFAULT_STORAGE_KEY, RosterError, RosterResult, RosterSession, RosterStore, SubmitOutcome,
};
pub use validation::{ValidationError, ValidationResult, escape_html, validate_student};
