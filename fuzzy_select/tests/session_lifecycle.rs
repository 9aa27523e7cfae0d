// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal is restored exactly once, whatever happens during the selection.

use fuzzy_select::{SelectOptions, TerminalSession, select_with,
                   test_fixtures::{BackendCall, FakeTerminalBackend}};
use pretty_assertions::assert_eq;
use test_case::test_case;

const DRIVERS: &[&str] = &["Leclerc", "Hamilton", "Norris"];

#[test_case(BackendCall::Read, 2 ; "read fails mid loop")]
#[test_case(BackendCall::Write, 3 ; "render fails mid loop")]
#[test_case(BackendCall::Write, 1 ; "first render fails")]
fn test_error_mid_loop_still_releases_once(call: BackendCall, nth: usize) {
    let (backend, recording) = FakeTerminalBackend::new_mock(["l", "c", "\r"]);
    let backend = backend.fail_on_nth(call, nth);
    let mut final_output = Vec::new();

    let result = select_with(DRIVERS, backend, &SelectOptions::default(), &mut final_output);

    assert!(result.is_err());
    assert!(final_output.is_empty());
    assert_eq!(recording.count(BackendCall::Restore), 1);
    assert_eq!(recording.calls().last(), Some(&BackendCall::Restore));
    assert!(!recording.is_raw());
}

#[test]
fn test_failed_acquire_never_restores() {
    let (backend, recording) = FakeTerminalBackend::new_mock(["l"]);
    let backend = backend.fail_on_nth(BackendCall::Capture, 1);

    let result = select_with(DRIVERS, backend, &SelectOptions::default(), &mut std::io::sink());

    assert!(result.is_err());
    assert_eq!(recording.calls(), vec![BackendCall::Capture]);
}

#[test]
fn test_error_reports_its_diagnostic_code() {
    let (backend, _recording) = FakeTerminalBackend::new_mock(["l"]);
    let backend = backend.fail_on_nth(BackendCall::Read, 1);

    let report = select_with(DRIVERS, backend, &SelectOptions::default(), &mut std::io::sink())
        .unwrap_err();

    assert_eq!(
        report.code().map(|it| it.to_string()),
        Some("fuzzy_select::terminal::read".to_string())
    );
}

#[test]
fn test_release_twice_makes_one_restore_call() {
    let (backend, recording) = FakeTerminalBackend::new_mock(Vec::<&str>::new());
    let mut session = TerminalSession::acquire(backend).unwrap();

    session.release().unwrap();
    let calls_after_first_release = recording.calls();
    session.release().unwrap();

    assert_eq!(recording.calls(), calls_after_first_release);
    assert_eq!(recording.count(BackendCall::Restore), 1);
}

#[test]
fn test_dropping_an_unreleased_session_restores_it() {
    let (backend, recording) = FakeTerminalBackend::new_mock(Vec::<&str>::new());
    {
        let _session = TerminalSession::acquire(backend).unwrap();
        assert!(recording.is_raw());
    }
    assert!(!recording.is_raw());
    assert_eq!(recording.count(BackendCall::Restore), 1);
}

#[test]
fn test_moved_session_is_released_once() {
    let (backend, recording) = FakeTerminalBackend::new_mock(Vec::<&str>::new());
    let session = TerminalSession::acquire(backend).unwrap();

    let mut moved = session;
    moved.release().unwrap();
    drop(moved);

    assert_eq!(recording.count(BackendCall::Restore), 1);
}
