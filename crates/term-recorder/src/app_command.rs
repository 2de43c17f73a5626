use term_recorder_core::RecorderError;

/// Failures reported by the key listener thread to the main application loop.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// The listener thread failed to append to the session file.
    WriteFailed {
        /// Error description for the log.
        reason: String,
    },
    /// The global key hook stopped.
    ListenerFailed {
        /// Error description for the log.
        reason: String,
    },
}

impl From<RecorderError> for AppCommand {
    fn from(e: RecorderError) -> Self {
        let reason = e.to_string();
        match e {
            RecorderError::FileWriteFailed { .. } => AppCommand::WriteFailed { reason },
            _ => AppCommand::ListenerFailed { reason },
        }
    }
}
