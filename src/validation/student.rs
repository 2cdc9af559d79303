//! Student form validation
//!
//! Rules are checked in a fixed order and the first failing rule is reported.
//! Callers rely on that order for deterministic messaging, so a form with an
//! invalid name and an invalid email always reports the name.

use crate::models::{StudentFields, StudentForm};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

static STUDENT_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static CONTACT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,}$").unwrap());

/// Errors that can occur while validating a student form.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    /// Every field is blank
    #[error("Please fill at least one field.")]
    EmptyRecord,

    #[error("Name must contain only letters and spaces.")]
    InvalidName,

    #[error("Student ID must be numeric.")]
    InvalidStudentId,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Contact must be at least 10 digits.")]
    InvalidContact,
}

impl ValidationError {
    /// Stable machine-readable identifier for this error
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyRecord => "empty_record",
            ValidationError::InvalidName => "invalid_name",
            ValidationError::InvalidStudentId => "invalid_student_id",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidContact => "invalid_contact",
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Strip surrounding whitespace, including a byte order mark pasted in front
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Letters and whitespace only, at least one character
pub fn is_name_valid(name: &str) -> bool {
    NAME_REGEX.is_match(trim_input(name))
}

/// ASCII digits only, at least one
pub fn is_student_id_valid(student_id: &str) -> bool {
    STUDENT_ID_REGEX.is_match(student_id)
}

/// Minimal `local@domain.tld` shape, no whitespace
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Ten or more ASCII digits
pub fn is_contact_valid(contact: &str) -> bool {
    CONTACT_REGEX.is_match(contact)
}

/// Validate a raw student form.
///
/// # Rules
///
/// Checked in this order, first failure wins:
///
/// 1. At least one field must be non-blank after trimming
/// 2. Name: letters and whitespace only
/// 3. Student ID: digits only
/// 4. Email: `local@domain.tld`
/// 5. Contact: at least 10 digits
///
/// On success the trimmed values are returned.
///
/// # Examples
///
/// ```
/// use student_roster::models::StudentForm;
/// use student_roster::validation::{ValidationError, validate_student};
///
/// let form = StudentForm::new(" Ann Lee ", "1023", "a@b.com", "5551234567");
/// assert_eq!(validate_student(&form).unwrap().name, "Ann Lee");
///
/// let form = StudentForm::new("A1", "x", "bad", "1");
/// assert_eq!(validate_student(&form), Err(ValidationError::InvalidName));
/// ```
pub fn validate_student(form: &StudentForm) -> ValidationResult<StudentFields> {
    let name = trim_input(&form.name);
    let student_id = trim_input(&form.student_id);
    let email = trim_input(&form.email);
    let contact = trim_input(&form.contact);

    if name.is_empty() && student_id.is_empty() && email.is_empty() && contact.is_empty() {
        return Err(ValidationError::EmptyRecord);
    }

    if !is_name_valid(name) {
        return Err(ValidationError::InvalidName);
    }
    if !is_student_id_valid(student_id) {
        return Err(ValidationError::InvalidStudentId);
    }
    if !is_email_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_contact_valid(contact) {
        return Err(ValidationError::InvalidContact);
    }

    Ok(StudentFields {
        name: name.to_string(),
        student_id: student_id.to_string(),
        email: email.to_string(),
        contact: contact.to_string(),
    })
}
