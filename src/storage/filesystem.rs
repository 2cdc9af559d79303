//! File system storage backend
//!
//! Implements StorageBackend for native file system operations.
//! Each slot is one JSON document at `<base_path>/<key>.json`.
//!
//! ## Security
//!
//! Keys are validated before they are turned into paths. Keys containing ".."
//! or a path separator are rejected, so every slot file stays directly inside
//! the base directory.

use super::{StorageBackend, StorageError, validate_key};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File system storage backend
#[derive(Debug, Clone)]
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    ///
    /// # Arguments
    ///
    /// * `base_path` - Directory holding the slot files. Created on first write.
    ///
    /// # Example
    ///
    /// ```rust
    /// use student_roster::storage::filesystem::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/var/lib/roster");
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the slot files
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve the file backing `key`
    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl StorageBackend for FileSystemStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to read slot {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        fs::create_dir_all(&self.base_path).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to create directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        // Write beside the target, then rename over it so a crash mid-write
        // never leaves a truncated document behind.
        let tmp = self.base_path.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).map_err(|e| {
            StorageError::IoError(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StorageError::IoError(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to delete slot {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_traversal_blocked() {
        let temp = TempDir::new().unwrap();
        let backend = FileSystemStorageBackend::new(temp.path());

        let result = backend.slot_path("../etc/passwd");
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = backend.slot_path("nested/key");
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = backend.slot_path("students_v1");
        assert_eq!(result.unwrap(), temp.path().join("students_v1.json"));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileSystemStorageBackend::new(temp.path());

        backend.write("students_v1", "[]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["students_v1.json".to_string()]);
    }
}
