/// Status indicator states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Record off.
    Idle,
    /// Record on.
    Recording,
    /// Record off after a session file write failed.
    WriteFailed,
}

impl TrayIconState {
    /// Indicator colour as RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            TrayIconState::Idle | TrayIconState::WriteFailed => [0xE0, 0x3C, 0x31],
            TrayIconState::Recording => [0x46, 0xCB, 0x18],
        }
    }

    /// Tooltip text.
    pub fn tooltip(self) -> &'static str {
        match self {
            TrayIconState::Idle => "Terminal Recorder - Record off",
            TrayIconState::Recording => "Terminal Recorder - Record on",
            TrayIconState::WriteFailed => "Terminal Recorder - Record off (write failed)",
        }
    }

    /// Whether the Record menu item is enabled. Stop is always the opposite.
    pub fn record_enabled(self) -> bool {
        !matches!(self, TrayIconState::Recording)
    }
}
