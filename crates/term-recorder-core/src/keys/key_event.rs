use crate::NamedKey;

/// Identity of a key as seen by the translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A key without a character representation.
    Named(NamedKey),
    /// A key that produced a printable (or control) character.
    Character(char),
}

/// Press/release discrimination from the input hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key went down.
    Press,
    /// Key went up.
    Release,
}

/// One notification from the input hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// Whether the key was pressed or released.
    pub action: KeyAction,
    /// Which key.
    pub key: KeyEvent,
}

impl RawKeyEvent {
    /// Key-down notification.
    pub fn press(key: KeyEvent) -> Self {
        Self {
            action: KeyAction::Press,
            key,
        }
    }

    /// Key-up notification.
    pub fn release(key: KeyEvent) -> Self {
        Self {
            action: KeyAction::Release,
            key,
        }
    }
}
