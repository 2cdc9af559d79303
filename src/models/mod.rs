//! Models module
//!
//! Defines the student record and the raw/validated field sets used when
//! creating or updating one.

pub mod student;

pub use student::{Student, StudentFields, StudentForm};
