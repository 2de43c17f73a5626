/// What a tray menu click asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start recording.
    Record,
    /// Stop recording.
    Stop,
    /// Write the display transcript to disk and open it.
    ShowTranscript,
    /// Quit the application.
    Exit,
}
