//! Roster store
//!
//! Owns the ordered collection of student records and mirrors it to a single
//! storage slot. Every mutation is written through before it returns; if the
//! write fails the mutation is undone, so memory and slot never disagree.

use super::error::{RosterError, RosterResult};
use super::id::generate_record_id;
use crate::models::{Student, StudentFields, StudentForm};
use crate::storage::{StorageBackend, StorageError};
use crate::validation::{ValidationResult, validate_student};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Default slot key. The `_v1` suffix versions the document shape.
pub const DEFAULT_STORAGE_KEY: &str = "students_v1";

/// Student roster backed by a storage slot
pub struct RosterStore<B: StorageBackend> {
    storage: B,
    key: String,
    students: Vec<Student>,
    issued_ids: HashSet<String>,
}

impl<B: StorageBackend> RosterStore<B> {
    /// Load the roster from `key` in `storage`.
    ///
    /// A missing slot, an empty document, or a document that does not parse as
    /// a list of records all yield an empty roster. Failures are logged, never
    /// returned.
    pub fn load(storage: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let students = match storage.read(&key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<Student>>(&raw) {
                    Ok(students) => students,
                    Err(e) => {
                        warn!("Discarding unreadable roster in slot {}: {}", key, e);
                        Vec::new()
                    }
                }
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!("Failed to read roster slot {}: {}", key, e);
                Vec::new()
            }
        };

        info!("Loaded {} student(s) from slot {}", students.len(), key);
        let issued_ids = students.iter().map(|s| s.id.clone()).collect();
        Self {
            storage,
            key,
            students,
            issued_ids,
        }
    }

    /// Load the roster from the default slot
    pub fn load_default(storage: B) -> Self {
        Self::load(storage, DEFAULT_STORAGE_KEY)
    }

    /// Validate a raw form. Pure; see [`validate_student`].
    pub fn validate(form: &StudentForm) -> ValidationResult<StudentFields> {
        validate_student(form)
    }

    /// Append a new record and persist
    pub fn create(&mut self, fields: StudentFields) -> RosterResult<Student> {
        let id = self.next_id();
        let student = Student::new(id, fields);
        self.students.push(student.clone());

        if let Err(e) = self.persist() {
            self.students.pop();
            return Err(e.into());
        }

        self.issued_ids.insert(student.id.clone());
        info!("Created student {}", student.id);
        Ok(student)
    }

    /// Replace every field but `id` of an existing record, in place
    pub fn update(&mut self, id: &str, fields: StudentFields) -> RosterResult<Student> {
        let idx = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        let previous = self.students[idx].fields();
        self.students[idx].apply(fields);

        if let Err(e) = self.persist() {
            self.students[idx].apply(previous);
            return Err(e.into());
        }

        info!("Updated student {}", id);
        Ok(self.students[idx].clone())
    }

    /// Remove the record with `id` if present and persist.
    ///
    /// Deleting an unknown id is not an error; the roster is still persisted.
    pub fn delete(&mut self, id: &str) -> RosterResult<Option<Student>> {
        let removed = self
            .position(id)
            .map(|idx| (idx, self.students.remove(idx)));

        if let Err(e) = self.persist() {
            if let Some((idx, student)) = removed {
                self.students.insert(idx, student);
            }
            return Err(e.into());
        }

        match removed {
            Some((_, student)) => {
                info!("Deleted student {}", id);
                Ok(Some(student))
            }
            None => {
                debug!("Delete of unknown student {} ignored", id);
                Ok(None)
            }
        }
    }

    /// Remove every record and persist
    pub fn clear(&mut self) -> RosterResult<()> {
        let previous = std::mem::take(&mut self.students);

        if let Err(e) = self.persist() {
            self.students = previous;
            return Err(e.into());
        }

        info!("Cleared {} student(s)", previous.len());
        Ok(())
    }

    /// Records whose name contains `query` (ignoring case) or whose student id
    /// contains `query` verbatim, in insertion order.
    ///
    /// An empty query yields every record.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Student> + 'a {
        debug!("Searching {} student(s) for {:?}", self.students.len(), query);
        self.students.iter().filter(move |s| s.matches(query))
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// All records in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Slot key this store mirrors to
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut B {
        &mut self.storage
    }

    /// Give the backend back, dropping the in-memory roster
    pub fn into_storage(self) -> B {
        self.storage
    }

    /// Serialize the whole roster into the slot
    fn persist(&mut self) -> Result<(), StorageError> {
        let document = serde_json::to_string(&self.students).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize roster: {}", e))
        })?;
        self.storage.write(&self.key, &document)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    /// A fresh id that no current record holds and this store never loaded or issued
    fn next_id(&self) -> String {
        loop {
            let id = generate_record_id();
            if !self.issued_ids.contains(&id) && self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorageBackend;

    fn fields(name: &str, student_id: &str) -> StudentFields {
        StudentFields {
            name: name.to_string(),
            student_id: student_id.to_string(),
            email: "a@b.com".to_string(),
            contact: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let store = RosterStore::load_default(MemoryStorageBackend::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_slot_is_empty() {
        for raw in ["not json", "{\"a\":1}", "null", "   ", "[{\"id\":1}]"] {
            let backend = MemoryStorageBackend::with_slot(DEFAULT_STORAGE_KEY, raw);
            let store = RosterStore::load_default(backend);
            assert!(store.is_empty(), "expected empty roster for {:?}", raw);
        }
    }

    #[test]
    fn test_create_writes_through() {
        let mut store = RosterStore::load_default(MemoryStorageBackend::new());
        let created = store.create(fields("Ann Lee", "1023")).unwrap();

        let raw = store.storage().get(DEFAULT_STORAGE_KEY).unwrap();
        let persisted: Vec<Student> = serde_json::from_str(raw).unwrap();
        assert_eq!(persisted, vec![created]);
    }

    #[test]
    fn test_failed_write_rolls_back_create() {
        let mut store = RosterStore::load_default(MemoryStorageBackend::new());
        store.create(fields("Ann Lee", "1023")).unwrap();
        store.storage_mut().fail_writes(true);

        let result = store.create(fields("Bob", "7"));
        assert!(matches!(result, Err(RosterError::PersistFailed(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_write_rolls_back_update_delete_clear() {
        let mut store = RosterStore::load_default(MemoryStorageBackend::new());
        let a = store.create(fields("Ann Lee", "1023")).unwrap();
        let b = store.create(fields("Bob Ray", "2048")).unwrap();
        store.storage_mut().fail_writes(true);

        assert!(store.update(&a.id, fields("Changed", "1")).is_err());
        assert!(store.delete(&a.id).is_err());
        assert!(store.clear().is_err());

        assert_eq!(store.students(), &[a, b]);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut store = RosterStore::load_default(MemoryStorageBackend::new());
        let result = store.update("missing", fields("Ann", "1"));
        assert!(matches!(result, Err(RosterError::NotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_loaded_ids_stay_reserved_after_delete() {
        let raw = r#"[{"id":"x1","name":"Ann","studentId":"1","email":"a@b.co","contact":"1234567890"}]"#;
        let mut store =
            RosterStore::load_default(MemoryStorageBackend::with_slot(DEFAULT_STORAGE_KEY, raw));
        assert!(store.issued_ids.contains("x1"));

        store.delete("x1").unwrap();
        store.clear().unwrap();
        assert!(store.get("x1").is_none());
        assert!(store.issued_ids.contains("x1"));
    }

    #[test]
    fn test_delete_unknown_still_persists() {
        let mut store = RosterStore::load_default(MemoryStorageBackend::new());
        assert_eq!(store.delete("missing").unwrap(), None);
        assert_eq!(store.storage().get(DEFAULT_STORAGE_KEY), Some("[]"));
    }
}
