//! Storage backend abstraction
//!
//! Defines the StorageBackend trait and implementations for different storage systems:
//! - MemoryStorageBackend: In-process map (tests, ephemeral sessions)
//! - FileSystemStorageBackend: Native file system (for native apps)
//! - BrowserStorageBackend: Browser localStorage (for WASM apps)
//!
//! A backend holds named slots. Each slot stores one whole text document and is
//! overwritten in full on every write.

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid slot key: {0}")]
    InvalidKey(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Trait for key-value slot storage
///
/// All operations are synchronous and run to completion before returning.
pub trait StorageBackend {
    /// Read the document stored under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the document stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reject keys that cannot safely name a slot on every backend
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.contains("..") || key.contains('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(format!(
            "key must not contain path separators or '..': {}",
            key
        )));
    }
    if key.chars().any(|c| c.is_control()) {
        return Err(StorageError::InvalidKey(
            "key must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

pub mod memory;

#[cfg(feature = "native-fs")]
pub mod filesystem;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod browser;

pub use memory::MemoryStorageBackend;
