/// Non-printable key identities.
///
/// Left/right variants of a modifier collapse onto one identity because
/// both translation tables treat them the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Escape.
    Escape,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Either control key.
    Ctrl,
    /// Either shift key.
    Shift,
    /// Alt or AltGr.
    Alt,
    /// Caps lock.
    CapsLock,
    /// Function key F1..=F12.
    F(u8),
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Insert.
    Insert,
    /// Command / Windows / Super.
    Meta,
    /// Num lock.
    NumLock,
    /// Scroll lock.
    ScrollLock,
    /// Print screen.
    PrintScreen,
    /// Pause / Break.
    Pause,
    /// Key the hook reported by raw code only.
    Unknown(u32),
}
