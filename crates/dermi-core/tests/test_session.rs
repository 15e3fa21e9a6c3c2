use std::path::PathBuf;

use dermi_core::analysis::Analysis;
use dermi_core::session::{UploadGateError, UploadSession};

fn some_analysis() -> Analysis {
    Analysis {
        erythema_index: Some(5.0),
        ..Default::default()
    }
}

#[test]
fn test_begin_without_file_is_refused() {
    let mut session = UploadSession::new();
    let err = session.begin_upload().unwrap_err();
    assert_eq!(err, UploadGateError::NoFileSelected);
    assert!(!session.is_uploading());
    assert!(session.analysis().is_none());
}

#[test]
fn test_begin_with_file_marks_in_flight() {
    let mut session = UploadSession::new();
    session.select_file(PathBuf::from("skin.jpg"));

    let path = session.begin_upload().unwrap();
    assert_eq!(path, PathBuf::from("skin.jpg"));
    assert!(session.is_uploading());
}

#[test]
fn test_second_begin_while_in_flight_is_refused() {
    let mut session = UploadSession::new();
    session.select_file(PathBuf::from("skin.jpg"));
    session.begin_upload().unwrap();

    let err = session.begin_upload().unwrap_err();
    assert_eq!(err, UploadGateError::UploadInFlight);
}

#[test]
fn test_complete_stores_results_and_clears_flag() {
    let mut session = UploadSession::new();
    session.select_file(PathBuf::from("skin.jpg"));
    session.begin_upload().unwrap();

    session.complete(some_analysis());
    assert!(!session.is_uploading());
    assert!(session.analysis().is_some());

    // The next attempt is allowed again.
    assert!(session.begin_upload().is_ok());
}

#[test]
fn test_reject_drops_results_and_clears_flag() {
    let mut session = UploadSession::new();
    session.select_file(PathBuf::from("skin.jpg"));
    session.begin_upload().unwrap();
    session.complete(some_analysis());

    session.begin_upload().unwrap();
    session.reject();
    assert!(!session.is_uploading());
    assert!(session.analysis().is_none());
}

#[test]
fn test_abort_keeps_prior_results_and_clears_flag() {
    let mut session = UploadSession::new();
    session.select_file(PathBuf::from("skin.jpg"));
    session.begin_upload().unwrap();
    session.complete(some_analysis());

    // A transport failure on the next attempt leaves the display alone.
    session.begin_upload().unwrap();
    session.abort();
    assert!(!session.is_uploading());
    let kept = session.analysis().unwrap();
    assert_eq!(kept.erythema_index, Some(5.0));
}

#[test]
fn test_selecting_a_file_does_not_touch_results() {
    let mut session = UploadSession::new();
    session.select_file(PathBuf::from("one.jpg"));
    session.begin_upload().unwrap();
    session.complete(some_analysis());

    session.select_file(PathBuf::from("two.jpg"));
    assert!(session.analysis().is_some());
    assert_eq!(session.selected_file().unwrap(), PathBuf::from("two.jpg"));
}
