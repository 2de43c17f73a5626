use crate::TrayIconState;

use term_recorder_core::RecordingSession;

/// User intent or failure that changes the armed state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Record clicked.
    Record,
    /// Stop clicked.
    Stop,
    /// The listener reported a session file write failure.
    WriteFailed,
}

impl SessionAction {
    /// Apply to `session` and return the indicator state to show, if it changed.
    ///
    /// Record and Stop are no-ops when the session is already in the requested
    /// state. A write failure always disarms and always flags the indicator,
    /// even if the pipeline already disarmed the session.
    pub fn apply(self, session: &RecordingSession) -> Option<TrayIconState> {
        match self {
            SessionAction::Record => session.arm().then_some(TrayIconState::Recording),
            SessionAction::Stop => session.disarm().then_some(TrayIconState::Idle),
            SessionAction::WriteFailed => {
                session.disarm();
                Some(TrayIconState::WriteFailed)
            }
        }
    }
}
