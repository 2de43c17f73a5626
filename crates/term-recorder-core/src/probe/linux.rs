use crate::{CoreResult, probe::helper_output};

#[track_caller]
pub(super) fn foreground_app_name() -> CoreResult<String> {
    helper_output("xdotool", &["getactivewindow", "getwindowname"])
}
