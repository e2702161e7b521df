use crate::{
    ControlState, NoticeLevel, RecorderConfig, RecorderLauncher, SessionController, SessionError,
    SessionEvent, SessionStatus, StatusColor, tests::support::RecordingPresenter,
};

use std::{path::Path, sync::mpsc, time::Duration};

use uuid::Uuid;

type Controller = SessionController<RecordingPresenter, mpsc::Sender<SessionEvent>>;

fn controller() -> (Controller, mpsc::Receiver<SessionEvent>) {
    let (tx, rx) = mpsc::channel();
    let controller =
        SessionController::new(RecorderLauncher::default(), RecordingPresenter::default(), tx);
    (controller, rx)
}

/// WHAT: A new controller presents the ready state
/// WHY: The UI must show something before the first recording
#[test]
fn given_new_controller_when_created_then_ready_to_record() {
    // Given/When: A fresh controller
    let (controller, _rx) = controller();

    // Then: Idle, green "Ready to record", save disabled
    assert_eq!(controller.status(), SessionStatus::Idle);
    assert_eq!(controller.presenter().last_status(), Some("Ready to record"));
    assert_eq!(controller.presenter().last_color(), Some(StatusColor::Green));
    assert_eq!(controller.presenter().controls, Some(ControlState::ready(false)));
}

/// WHAT: Empty URL is rejected before anything is launched
/// WHY: The recorder would otherwise start on a blank page the user did not ask for
#[test]
fn given_empty_url_when_starting_then_empty_url_error_and_state_unchanged() {
    // Given: A javascript config without URL
    let (mut controller, rx) = controller();
    let config = RecorderConfig {
        url: String::new(),
        output_format: "javascript".into(),
        ..RecorderConfig::default()
    };

    // When: Starting
    let result = controller.start(&config);

    // Then: EmptyUrl, still Idle, user notified, no worker reported anything
    assert!(matches!(result, Err(SessionError::EmptyUrl { .. })));
    assert_eq!(controller.status(), SessionStatus::Idle);
    assert_eq!(controller.presenter().errors().len(), 1);
    assert_eq!(controller.presenter().errors()[0].message, "Please enter a target URL");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

/// WHAT: Whitespace-only URL counts as empty
/// WHY: The URL field is trimmed like the original entry box
#[test]
fn given_blank_url_when_starting_then_empty_url_error() {
    let (mut controller, _rx) = controller();
    let config = RecorderConfig {
        url: "   ".to_string(),
        ..RecorderConfig::default()
    };

    let result = controller.start(&config);

    assert!(matches!(result, Err(SessionError::EmptyUrl { .. })));
    assert_eq!(controller.status(), SessionStatus::Idle);
}

/// WHAT: A missing interpreter fails the start and moves to Error
/// WHY: Launch failures must be visible and leave the app ready to retry
#[test]
fn given_missing_interpreter_when_starting_then_spawn_failure_and_error_state() {
    // Given: A launcher pointing at a nonexistent interpreter
    let (tx, _rx) = mpsc::channel();
    let launcher = RecorderLauncher {
        interpreter: "/nonexistent/interpreter".to_string(),
        ..RecorderLauncher::default()
    };
    let mut controller = SessionController::new(launcher, RecordingPresenter::default(), tx);

    // When: Starting
    let result = controller.start(&RecorderConfig::default());

    // Then: SpawnFailure, Error state, still ready for another attempt
    assert!(matches!(result, Err(SessionError::SpawnFailure { .. })));
    assert_eq!(controller.status(), SessionStatus::Error);
    assert!(!controller.is_recording());
    assert_eq!(controller.presenter().last_status(), Some("Recording failed"));
    assert_eq!(controller.presenter().errors().len(), 1);
}

/// WHAT: Stop when nothing is recording changes nothing
/// WHY: Stop is reachable from menus and hotkeys at any time
#[test]
fn given_idle_when_stopping_then_no_op() {
    // Given: An idle controller
    let (mut controller, _rx) = controller();
    let statuses_before = controller.presenter().statuses.len();

    // When: Stopping
    controller.stop();

    // Then: No state change, no presenter traffic, no notice
    assert_eq!(controller.status(), SessionStatus::Idle);
    assert_eq!(controller.presenter().statuses.len(), statuses_before);
    assert!(controller.presenter().notices.is_empty());
}

/// WHAT: Reset from idle clears output and keeps save disabled
/// WHY: Clear is allowed whenever no recording runs
#[test]
fn given_idle_when_resetting_then_output_cleared() {
    let (mut controller, _rx) = controller();

    controller.reset();

    assert_eq!(controller.status(), SessionStatus::Idle);
    assert_eq!(controller.presenter().last_status(), Some("Output cleared"));
    assert_eq!(controller.presenter().last_color(), Some(StatusColor::Blue));
    assert_eq!(controller.presenter().script, None);
    assert_eq!(controller.presenter().controls, Some(ControlState::ready(false)));
}

/// WHAT: Reset from Error returns to Idle
/// WHY: Error is a ready state the user can clear
#[test]
fn given_error_state_when_resetting_then_idle() {
    // Given: A controller in Error after a failed launch
    let (tx, _rx) = mpsc::channel();
    let launcher = RecorderLauncher {
        interpreter: "/nonexistent/interpreter".to_string(),
        ..RecorderLauncher::default()
    };
    let mut controller = SessionController::new(launcher, RecordingPresenter::default(), tx);
    let _ = controller.start(&RecorderConfig::default());
    assert_eq!(controller.status(), SessionStatus::Error);

    // When: Resetting
    controller.reset();

    // Then: Idle
    assert_eq!(controller.status(), SessionStatus::Idle);
}

/// WHAT: Saving with no script warns and writes nothing
/// WHY: An empty file would silently overwrite the user's destination
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_script_when_saving_then_no_content_warning() {
    // Given: An idle controller and a destination
    let (mut controller, _rx) = controller();
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("script.py");

    // When: Saving
    let result = controller.save(&destination);

    // Then: NoContentToSave, a warning, and no file
    assert!(matches!(result, Err(SessionError::NoContentToSave { .. })));
    assert_eq!(controller.presenter().notices.len(), 1);
    assert_eq!(controller.presenter().notices[0].level, NoticeLevel::Warning);
    assert_eq!(controller.presenter().notices[0].message, "No code to save");
    assert!(!destination.exists());
}

/// WHAT: Exit reports for unknown sessions are dropped
/// WHY: A late report must never clobber the current state
#[test]
fn given_unknown_session_when_exit_reported_then_ignored() {
    // Given: An idle controller
    let (mut controller, _rx) = controller();
    let statuses_before = controller.presenter().statuses.len();

    // When: An exit for a session it never started arrives
    controller.handle_event(SessionEvent::Exited {
        session_id: Uuid::new_v4(),
        exit_code: Some(0),
        log: String::new(),
    });

    // Then: Nothing changes
    assert_eq!(controller.status(), SessionStatus::Idle);
    assert_eq!(controller.presenter().statuses.len(), statuses_before);
    assert!(controller.presenter().notices.is_empty());
}

/// WHAT: Termination failures are reported whatever the state
/// WHY: The user must learn that a recorder may still be running
#[test]
fn given_termination_failure_when_reported_then_error_notice() {
    // Given: An idle controller
    let (mut controller, _rx) = controller();

    // When: A termination failure arrives
    controller.handle_event(SessionEvent::TerminationFailed {
        session_id: Uuid::new_v4(),
        reason: "terminate failed: No such process".to_string(),
    });

    // Then: Error notice, state untouched
    let errors = controller.presenter().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Failed to stop recording: terminate failed: No such process"
    );
    assert_eq!(controller.status(), SessionStatus::Idle);
}

/// WHAT: Missing content is reported before the destination is touched
/// WHY: A bad destination must not mask the real problem
#[test]
fn given_missing_directory_when_saving_without_script_then_no_content_checked_first() {
    // Given: A destination in a directory that does not exist
    let (mut controller, _rx) = controller();

    // When: Saving with no script
    let result = controller.save(Path::new("/nonexistent/dir/script.py"));

    // Then: Content is checked before the destination is touched
    assert!(matches!(result, Err(SessionError::NoContentToSave { .. })));
}
