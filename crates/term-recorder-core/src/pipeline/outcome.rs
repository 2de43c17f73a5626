/// Why a key event produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Key-up notifications never produce output.
    KeyRelease,
    /// The foreground probe failed; treated as no match.
    ProbeFailed,
    /// The foreground application does not contain the target substring.
    NotTargetApp,
    /// The target application is focused but recording is off.
    Disarmed,
    /// A named key with no entry in either table.
    Untranslatable,
}

/// Result of feeding one key event through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The key was appended to both sinks.
    Recorded {
        /// Text appended to the display surface (may be empty).
        display: String,
        /// Text appended to the session file (may be empty).
        file: String,
    },
    /// The key was discarded.
    Ignored(IgnoreReason),
}

impl CaptureOutcome {
    /// Whether the event reached the sinks.
    pub fn is_recorded(&self) -> bool {
        matches!(self, CaptureOutcome::Recorded { .. })
    }
}
