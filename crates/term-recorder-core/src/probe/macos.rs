use crate::{CoreResult, RecorderError};

use std::panic::Location;

use error_location::ErrorLocation;
use objc2_app_kit::NSWorkspace;

/// Localized name of the frontmost application (e.g. `Terminal`, `iTerm2`).
#[track_caller]
pub(super) fn foreground_app_name() -> CoreResult<String> {
    let location = ErrorLocation::from(Location::caller());
    let workspace = NSWorkspace::sharedWorkspace();

    let frontmost = workspace
        .frontmostApplication()
        .ok_or_else(|| RecorderError::ProbeUnavailable {
            reason: "No frontmost application".to_string(),
            location,
        })?;

    frontmost
        .localizedName()
        .map(|name| name.to_string())
        .ok_or_else(|| RecorderError::ProbeUnavailable {
            reason: "Frontmost application has no localized name".to_string(),
            location,
        })
}
