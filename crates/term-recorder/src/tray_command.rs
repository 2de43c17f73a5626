use crate::TrayIconState;

use std::path::PathBuf;

/// Commands delivered to the main UI thread through the event loop proxy.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`) and
/// the display log, so every UI mutation flows through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Update the status indicator and menu state.
    SetState(TrayIconState),
    /// Append DisplayTable-encoded text to the display log.
    AppendDisplay(String),
    /// Write the display log to this path and open it in the default viewer.
    ShowTranscript(PathBuf),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
