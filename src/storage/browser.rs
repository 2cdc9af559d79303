//! Browser storage backend
//!
//! Implements StorageBackend for `window.localStorage`.
//! Used by WASM apps; the slot is private to the page's origin.

use super::{StorageBackend, StorageError, validate_key};
use web_sys::Storage;

/// Browser storage backend using localStorage
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorageBackend;

impl BrowserStorageBackend {
    /// Create a new browser storage backend
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use student_roster::storage::browser::BrowserStorageBackend;
    ///
    /// let backend = BrowserStorageBackend::new();
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Get localStorage instance
    fn local_storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::BackendError("Window not available".to_string()))?;

        window
            .local_storage()
            .map_err(|e| {
                StorageError::BackendError(format!("localStorage not available: {:?}", e))
            })?
            .ok_or_else(|| StorageError::BackendError("localStorage is None".to_string()))
    }
}

impl StorageBackend for BrowserStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        self.local_storage()?.get_item(key).map_err(|e| {
            StorageError::BackendError(format!("Failed to read from localStorage: {:?}", e))
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        // setItem throws QuotaExceededError when the origin is full
        self.local_storage()?.set_item(key, value).map_err(|e| {
            StorageError::BackendError(format!("Failed to write to localStorage: {:?}", e))
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.local_storage()?.remove_item(key).map_err(|e| {
            StorageError::BackendError(format!("Failed to remove from localStorage: {:?}", e))
        })
    }
}
