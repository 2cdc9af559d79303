//! Validation functionality
//!
//! Provides the ordered field rules a student form must pass before it can be
//! stored, plus output sanitization for callers that embed records in markup.

pub mod input;
pub mod student;

pub use input::escape_html;
pub use student::{
    ValidationError, ValidationResult, is_contact_valid, is_email_valid, is_name_valid,
    is_student_id_valid, validate_student,
};
