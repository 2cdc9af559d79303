//! Roster module
//!
//! The store owning validation, mutation and persistence of student records,
//! and the session that tracks edit/search state for a front end.

pub mod error;
pub mod id;
pub mod session;
pub mod store;

pub use error::{RosterError, RosterResult};
pub use id::generate_record_id;
pub use session::{RosterSession, SubmitOutcome};
pub use store::{DEFAULT_STORAGE_KEY, RosterStore};
