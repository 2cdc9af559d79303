//! Export functionality
//!
//! Provides exporters for rendering a set of student records:
//! - HTML table rows (escaped, for embedding in a page)
//! - JSON (the persisted document shape)

pub mod html;

pub use html::HtmlTableExporter;

use crate::models::Student;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Export records as a pretty-printed JSON array
pub fn export_json<'a>(
    students: impl IntoIterator<Item = &'a Student>,
) -> Result<String, ExportError> {
    let students: Vec<&Student> = students.into_iter().collect();
    serde_json::to_string_pretty(&students)
        .map_err(|e| ExportError::SerializationError(e.to_string()))
}
