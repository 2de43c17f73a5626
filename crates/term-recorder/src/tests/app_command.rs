use crate::AppCommand;

use std::{io, panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use term_recorder_core::RecorderError;

/// WHAT: File write failures map to WriteFailed
/// WHY: The app must disarm and flag the status indicator only for write failures
#[test]
fn given_file_write_error_when_converting_then_write_failed_command() {
    // Given: A write failure from the pipeline
    let err = RecorderError::FileWriteFailed {
        path: PathBuf::from("recorded_files/recorded_keys.log"),
        source: io::Error::new(io::ErrorKind::StorageFull, "disk full"),
        location: ErrorLocation::from(Location::caller()),
    };

    // When: Converting to an app command
    let cmd = AppCommand::from(err);

    // Then: It is a WriteFailed carrying the cause
    assert!(matches!(cmd, AppCommand::WriteFailed { ref reason } if reason.contains("disk full")));
}

/// WHAT: Hook failures map to ListenerFailed
/// WHY: A dead hook is logged without touching the armed state
#[test]
fn given_listener_error_when_converting_then_listener_failed_command() {
    let err = RecorderError::ListenerFailed {
        reason: "EventTapError".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let cmd = AppCommand::from(err);

    assert!(matches!(cmd, AppCommand::ListenerFailed { ref reason } if reason.contains("EventTapError")));
}
