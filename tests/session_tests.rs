//! Roster session (edit workflow) tests

use student_roster::models::StudentForm;
use student_roster::roster::{RosterError, RosterSession, RosterStore, SubmitOutcome};
use student_roster::storage::MemoryStorageBackend;
use student_roster::validation::ValidationError;

fn session() -> RosterSession<MemoryStorageBackend> {
    RosterSession::new(RosterStore::load_default(MemoryStorageBackend::new()))
}

fn ann() -> StudentForm {
    StudentForm::new("Ann Lee", "1023", "a@b.com", "5551234567")
}

fn bob() -> StudentForm {
    StudentForm::new("Bob Ray", "2048", "b@c.org", "5559876543")
}

fn created_id(outcome: SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Created(s) => s.id,
        other => panic!("Expected Created, got {:?}", other),
    }
}

#[test]
fn test_submit_without_edit_creates() {
    let mut session = session();
    assert_eq!(session.submit_label(), "Add");
    created_id(session.submit(&ann()).unwrap());
    assert_eq!(session.view().len(), 1);
}

#[test]
fn test_edit_prefills_and_updates() {
    let mut session = session();
    let id = created_id(session.submit(&ann()).unwrap());
    created_id(session.submit(&bob()).unwrap());

    let mut form = session.start_edit(&id).unwrap();
    assert_eq!(form, ann());
    assert_eq!(session.submit_label(), "Update");

    form.name = "Ann Smith".to_string();
    match session.submit(&form).unwrap() {
        SubmitOutcome::Updated(s) => assert_eq!(s.name, "Ann Smith"),
        other => panic!("Expected Updated, got {:?}", other),
    }

    assert_eq!(session.editing(), None);
    let view = session.view();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].name, "Ann Smith");
    assert_eq!(view[1].name, "Bob Ray");
}

#[test]
fn test_invalid_submit_keeps_edit_mode() {
    let mut session = session();
    let id = created_id(session.submit(&ann()).unwrap());
    session.start_edit(&id).unwrap();

    let bad = StudentForm::new("Ann Lee", "1023", "nope", "5551234567");
    let err = session.submit(&bad).unwrap_err();
    assert!(matches!(
        err,
        RosterError::Validation(ValidationError::InvalidEmail)
    ));
    assert_eq!(session.editing(), Some(id.as_str()));
    assert_eq!(session.view()[0].email, "a@b.com");
}

#[test]
fn test_start_edit_unknown_id() {
    let mut session = session();
    assert!(session.start_edit("ghost").is_none());
    assert_eq!(session.editing(), None);
}

#[test]
fn test_deleting_edited_record_leaves_edit_mode() {
    let mut session = session();
    let id = created_id(session.submit(&ann()).unwrap());
    session.start_edit(&id).unwrap();

    session.delete(&id).unwrap();
    assert_eq!(session.editing(), None);

    // the next submit creates instead of silently updating nothing
    created_id(session.submit(&bob()).unwrap());
    assert_eq!(session.view().len(), 1);
}

#[test]
fn test_reset_leaves_edit_mode() {
    let mut session = session();
    let id = created_id(session.submit(&ann()).unwrap());
    session.start_edit(&id).unwrap();
    session.reset();
    assert_eq!(session.submit_label(), "Add");
}

#[test]
fn test_query_filters_view() {
    let mut session = session();
    session.submit(&ann()).unwrap();
    session.submit(&bob()).unwrap();

    session.set_query("  bob ");
    assert_eq!(session.query(), "bob");
    let view = session.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Bob Ray");

    session.set_query("");
    assert_eq!(session.view().len(), 2);
}

#[test]
fn test_clear_empties_view() {
    let mut session = session();
    session.submit(&ann()).unwrap();
    session.clear().unwrap();
    session.clear().unwrap();
    assert!(session.view().is_empty());
}
