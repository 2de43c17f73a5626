//! Foreground application lookup.
//!
//! Best-effort and uncached: every key event asks again. Failures surface as
//! [`RecorderError::ProbeUnavailable`](crate::RecorderError::ProbeUnavailable)
//! from [`ForegroundProbe`], and as an empty string from
//! [`current_foreground_app_name`].

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use crate::CoreResult;

use tracing::trace;

/// Source of the name of the application currently holding input focus.
pub trait ForegroundProbe: Send + Sync {
    /// Name of the foreground process or window.
    fn foreground_app_name(&self) -> CoreResult<String>;
}

/// Probe backed by the host operating system.
///
/// - Linux: `xdotool getactivewindow getwindowname` (X11 only)
/// - macOS: `NSWorkspace` frontmost application's localized name
/// - Windows: executable name of the foreground window's owning process
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ForegroundProbe for SystemProbe {
    #[track_caller]
    fn foreground_app_name(&self) -> CoreResult<String> {
        #[cfg(target_os = "linux")]
        {
            linux::foreground_app_name()
        }
        #[cfg(target_os = "macos")]
        {
            macos::foreground_app_name()
        }
        #[cfg(target_os = "windows")]
        {
            windows::foreground_app_name()
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            Err(crate::RecorderError::ProbeUnavailable {
                reason: "unsupported platform".to_string(),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            })
        }
    }
}

/// Name of the foreground application, or an empty string if it cannot be
/// determined.
pub fn current_foreground_app_name() -> String {
    match SystemProbe.foreground_app_name() {
        Ok(name) => name,
        Err(e) => {
            trace!(error = %e, "Foreground probe failed");
            String::new()
        }
    }
}

/// Run a helper command and return its trimmed stdout.
#[cfg(target_os = "linux")]
#[track_caller]
pub(crate) fn helper_output(program: &str, args: &[&str]) -> CoreResult<String> {
    use crate::RecorderError;

    use std::{panic::Location, process::Command};

    use error_location::ErrorLocation;

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| RecorderError::ProbeUnavailable {
            reason: format!("Failed to run {}: {}", program, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !output.status.success() {
        return Err(RecorderError::ProbeUnavailable {
            reason: format!("{} exited with {}", program, output.status),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
