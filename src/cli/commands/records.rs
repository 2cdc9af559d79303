//! Mutating commands: add, update, delete, clear

use super::{CliSession, confirm};
use crate::cli::error::CliError;
use crate::models::StudentForm;
use crate::roster::SubmitOutcome;
use std::io::BufRead;

/// Field overrides for the `update` command; `None` keeps the stored value
#[derive(Debug, Default, Clone)]
pub struct UpdateArgs {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

/// Handle the `add` command
pub fn handle_add(session: &mut CliSession, form: &StudentForm) -> Result<String, CliError> {
    match session.submit(form)? {
        SubmitOutcome::Created(student) => Ok(format!("Added student {}", student.id)),
        other => Err(CliError::InvalidArgument(format!(
            "Unexpected outcome for add: {:?}",
            other
        ))),
    }
}

/// Handle the `update` command
///
/// Starts an edit of `id`, applies the overrides on top of the stored values and
/// submits the result through the same validation as `add`.
pub fn handle_update(
    session: &mut CliSession,
    id: &str,
    args: UpdateArgs,
) -> Result<String, CliError> {
    let mut form = session
        .start_edit(id)
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;

    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(student_id) = args.student_id {
        form.student_id = student_id;
    }
    if let Some(email) = args.email {
        form.email = email;
    }
    if let Some(contact) = args.contact {
        form.contact = contact;
    }

    let outcome = session.submit(&form);
    session.reset();
    match outcome? {
        SubmitOutcome::Updated(student) => Ok(format!("Updated student {}", student.id)),
        SubmitOutcome::EditTargetMissing(id) => Err(CliError::NotFound(id)),
        SubmitOutcome::Created(student) => Err(CliError::InvalidArgument(format!(
            "Update unexpectedly created {}",
            student.id
        ))),
    }
}

/// Handle the `delete` command
pub fn handle_delete(
    session: &mut CliSession,
    id: &str,
    assume_yes: bool,
    input: &mut impl BufRead,
) -> Result<String, CliError> {
    if !assume_yes && !confirm("Delete this record?", input)? {
        return Ok("Cancelled".to_string());
    }

    match session.delete(id)? {
        Some(student) => Ok(format!("Deleted student {}", student.id)),
        None => Ok(format!("No student with id {}; nothing deleted", id)),
    }
}

/// Handle the `clear` command
pub fn handle_clear(
    session: &mut CliSession,
    assume_yes: bool,
    input: &mut impl BufRead,
) -> Result<String, CliError> {
    if !assume_yes && !confirm("Clear all records? This cannot be undone.", input)? {
        return Ok("Cancelled".to_string());
    }

    let count = session.store().len();
    session.clear()?;
    Ok(format!("Cleared {} record(s)", count))
}
