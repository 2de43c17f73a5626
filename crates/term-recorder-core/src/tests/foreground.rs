use crate::current_foreground_app_name;

/// WHAT: Without a desktop session the foreground name is the empty string
/// WHY: A missing helper or display must read as "no match" instead of an error
#[cfg(target_os = "linux")]
#[test]
fn given_no_desktop_session_when_reading_foreground_name_then_empty() {
    use std::process::Command;

    // Given: A host that cannot answer (no X display or no xdotool)
    let has_display = std::env::var_os("DISPLAY").is_some();
    let has_xdotool = Command::new("xdotool").arg("--version").output().is_ok();
    if has_display && has_xdotool {
        eprintln!("skipping: a desktop session can answer the foreground query");
        return;
    }

    // When: Asking for the foreground application
    let name = current_foreground_app_name();

    // Then: The failure is folded into an empty name
    assert_eq!(name, "");
}

/// WHAT: Helper failures surface as ProbeUnavailable
/// WHY: The pipeline folds exactly this error into "no match"
#[cfg(target_os = "linux")]
#[test]
fn given_missing_helper_when_running_then_unavailable_error() {
    use crate::{RecorderError, helper_output};

    let result = helper_output("term-recorder-no-such-helper", &[]);

    assert!(matches!(result, Err(RecorderError::ProbeUnavailable { .. })));
}

/// WHAT: The AppKit query either names an app or reports it as unavailable
/// WHY: Test runners without a login session have no frontmost application
#[cfg(target_os = "macos")]
#[test]
fn given_appkit_host_when_querying_frontmost_app_then_name_or_unavailable() {
    use crate::{ForegroundProbe, RecorderError, SystemProbe};

    match SystemProbe.foreground_app_name() {
        Ok(name) => assert!(!name.is_empty()),
        Err(e) => assert!(matches!(e, RecorderError::ProbeUnavailable { .. })),
    }
}
