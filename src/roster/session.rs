//! Roster session
//!
//! Holds the state a form-driven front end needs between user actions: which
//! record (if any) is being edited and the current search text. The session
//! owns its store, so there is no module-level roster or editing id.

use super::error::{RosterError, RosterResult};
use super::store::RosterStore;
use crate::models::{Student, StudentForm};
use crate::storage::StorageBackend;
use tracing::debug;

/// What a form submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Student),
    Updated(Student),
    /// The record being edited disappeared before the submission landed.
    /// Edit mode is left and nothing is written.
    EditTargetMissing(String),
}

/// Edit/search state wrapped around a [`RosterStore`]
pub struct RosterSession<B: StorageBackend> {
    store: RosterStore<B>,
    editing: Option<String>,
    query: String,
}

impl<B: StorageBackend> RosterSession<B> {
    pub fn new(store: RosterStore<B>) -> Self {
        Self {
            store,
            editing: None,
            query: String::new(),
        }
    }

    /// Validate the form, then create a record or update the one being edited.
    ///
    /// A validation failure mutates nothing and keeps edit mode as it was.
    pub fn submit(&mut self, form: &StudentForm) -> RosterResult<SubmitOutcome> {
        let fields = RosterStore::<B>::validate(form)?;

        match self.editing.clone() {
            Some(id) => match self.store.update(&id, fields) {
                Ok(student) => {
                    self.editing = None;
                    Ok(SubmitOutcome::Updated(student))
                }
                Err(RosterError::NotFound(id)) => {
                    debug!("Edit target {} vanished; leaving edit mode", id);
                    self.editing = None;
                    Ok(SubmitOutcome::EditTargetMissing(id))
                }
                Err(e) => Err(e),
            },
            None => Ok(SubmitOutcome::Created(self.store.create(fields)?)),
        }
    }

    /// Enter edit mode for `id`, returning its fields to pre-fill the form.
    ///
    /// Unknown ids leave the session unchanged.
    pub fn start_edit(&mut self, id: &str) -> Option<StudentForm> {
        let form = self.store.get(id).map(|s| StudentForm::from(s.fields()))?;
        self.editing = Some(id.to_string());
        Some(form)
    }

    /// Leave edit mode
    pub fn reset(&mut self) {
        self.editing = None;
    }

    /// Delete a record; leaves edit mode if it was the one being edited
    pub fn delete(&mut self, id: &str) -> RosterResult<Option<Student>> {
        let removed = self.store.delete(id)?;
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        Ok(removed)
    }

    /// Remove every record and leave edit mode
    pub fn clear(&mut self) -> RosterResult<()> {
        self.store.clear()?;
        self.editing = None;
        Ok(())
    }

    /// Set the search text (trimmed)
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records matching the current search text
    pub fn view(&self) -> Vec<&Student> {
        self.store.search(&self.query).collect()
    }

    /// Id of the record being edited
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Label for the form's submit button
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() { "Update" } else { "Add" }
    }

    pub fn store(&self) -> &RosterStore<B> {
        &self.store
    }

    pub fn into_store(self) -> RosterStore<B> {
        self.store
    }
}
