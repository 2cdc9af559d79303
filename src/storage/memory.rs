//! In-memory storage backend
//!
//! Keeps slots in a map owned by the backend. Nothing survives the process, but
//! the backend can be handed from one store to the next to simulate a restart.

use super::{StorageBackend, StorageError, validate_key};
use std::collections::HashMap;

/// In-memory storage backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStorageBackend {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorageBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with one slot already populated
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots,
            fail_writes: false,
        }
    }

    /// Make every subsequent write and remove fail, as a full quota would
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw slot contents, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes {
            return Err(StorageError::BackendError(format!(
                "Write to slot {} rejected: quota exceeded",
                key
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes {
            return Err(StorageError::BackendError(format!(
                "Remove of slot {} rejected",
                key
            )));
        }
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_none() {
        let backend = MemoryStorageBackend::new();
        assert_eq!(backend.read("students_v1").unwrap(), None);
    }

    #[test]
    fn test_write_overwrites() {
        let mut backend = MemoryStorageBackend::new();
        backend.write("k", "one").unwrap();
        backend.write("k", "two").unwrap();
        assert_eq!(backend.get("k"), Some("two"));
    }

    #[test]
    fn test_fail_writes_leaves_slot_untouched() {
        let mut backend = MemoryStorageBackend::with_slot("k", "kept");
        backend.fail_writes(true);
        assert!(matches!(
            backend.write("k", "lost"),
            Err(StorageError::BackendError(_))
        ));
        assert_eq!(backend.get("k"), Some("kept"));
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let mut backend = MemoryStorageBackend::new();
        assert!(backend.remove("nothing").is_ok());
    }
}
