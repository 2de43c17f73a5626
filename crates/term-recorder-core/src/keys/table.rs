//! Fixed key-to-string mappings.
//!
//! The display and file tables are maintained independently and are allowed
//! to diverge (enter renders as `\n` on screen but is persisted as `\r`).

use crate::{KeyEvent, NamedKey};

use std::borrow::Cow;

/// Immutable mapping from named key identity to output string.
#[derive(Debug)]
pub struct TranslationTable {
    name: &'static str,
    entries: &'static [(NamedKey, &'static str)],
}

/// Human-readable rendering used by the on-screen log.
pub const DISPLAY_TABLE: TranslationTable = TranslationTable {
    name: "display",
    entries: &[
        (NamedKey::Space, " "),
        (NamedKey::Enter, "\n"),
        (NamedKey::Tab, "\t"),
        (NamedKey::Backspace, "\x08"),
        (NamedKey::Delete, "\x7f"),
    ],
};

/// Terminal escape encoding persisted to the session file.
pub const FILE_TABLE: TranslationTable = TranslationTable {
    name: "file",
    entries: &[
        (NamedKey::Space, " "),
        (NamedKey::Enter, "\r"),
        (NamedKey::Tab, "\t"),
        (NamedKey::Escape, "\x1b"),
        (NamedKey::Up, "\x1b[A"),
        (NamedKey::Down, "\x1b[B"),
        (NamedKey::Right, "\x1b[C"),
        (NamedKey::Left, "\x1b[D"),
        (NamedKey::Ctrl, "\x1b[E"),
        (NamedKey::Shift, "\x1b[F"),
        (NamedKey::Backspace, "\x7f"),
        (NamedKey::Delete, "\x1b[3~"),
        (NamedKey::Alt, "\x1b[G"),
        (NamedKey::CapsLock, "\x1b[H"),
        (NamedKey::F(1), "\x1bOP"),
        (NamedKey::F(2), "\x1bOQ"),
        (NamedKey::F(3), "\x1bOR"),
        (NamedKey::F(4), "\x1bOS"),
        (NamedKey::F(5), "\x1b[15~"),
        (NamedKey::F(6), "\x1b[17~"),
        (NamedKey::F(7), "\x1b[18~"),
        (NamedKey::F(8), "\x1b[19~"),
        (NamedKey::F(9), "\x1b[20~"),
        (NamedKey::F(10), "\x1b[21~"),
        (NamedKey::F(11), "\x1b[23~"),
        (NamedKey::F(12), "\x1b[24~"),
    ],
};

impl TranslationTable {
    /// Table name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact-match lookup on a named key.
    pub fn get(&self, key: NamedKey) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(named, _)| *named == key)
            .map(|(_, out)| *out)
    }

    /// Translate a key event.
    ///
    /// Named keys are looked up by identity; characters pass through
    /// unchanged. Returns `None` for a named key with no entry, since it has
    /// no character payload to fall back on.
    pub fn translate(&self, event: &KeyEvent) -> Option<Cow<'static, str>> {
        match event {
            KeyEvent::Named(key) => self.get(*key).map(Cow::Borrowed),
            KeyEvent::Character(c) => Some(Cow::Owned(c.to_string())),
        }
    }
}
