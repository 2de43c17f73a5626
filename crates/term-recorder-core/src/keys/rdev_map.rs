use crate::{KeyEvent, NamedKey, RawKeyEvent};

use rdev::{Event, EventType, Key};

/// Convert an rdev event into capture-pipeline key events.
///
/// Returns nothing for mouse and wheel events. Named identities win over the
/// character payload so that space, enter and tab hit the tables even though
/// the hook also reports a character for them. A payload of several
/// characters (a dead key followed by a letter it cannot combine with) yields
/// one event per character.
pub(crate) fn raw_events_from_rdev(event: &Event) -> Vec<RawKeyEvent> {
    let (key, pressed) = match event.event_type {
        EventType::KeyPress(k) => (k, true),
        EventType::KeyRelease(k) => (k, false),
        _ => return Vec::new(),
    };

    key_events_from_parts(key, event.name.as_deref())
        .into_iter()
        .map(|key_event| {
            if pressed {
                RawKeyEvent::press(key_event)
            } else {
                RawKeyEvent::release(key_event)
            }
        })
        .collect()
}

pub(crate) fn key_events_from_parts(key: Key, name: Option<&str>) -> Vec<KeyEvent> {
    if let Some(named) = named_key(key) {
        return vec![KeyEvent::Named(named)];
    }

    let chars: Vec<KeyEvent> = name
        .unwrap_or_default()
        .chars()
        .map(KeyEvent::Character)
        .collect();

    if !chars.is_empty() {
        return chars;
    }

    vec![KeyEvent::Named(NamedKey::Unknown(match key {
        Key::Unknown(code) => code,
        _ => 0,
    }))]
}

fn named_key(key: Key) -> Option<NamedKey> {
    let named = match key {
        Key::Space => NamedKey::Space,
        Key::Return | Key::KpReturn => NamedKey::Enter,
        Key::Tab => NamedKey::Tab,
        Key::Backspace => NamedKey::Backspace,
        Key::Delete => NamedKey::Delete,
        Key::Escape => NamedKey::Escape,
        Key::UpArrow => NamedKey::Up,
        Key::DownArrow => NamedKey::Down,
        Key::LeftArrow => NamedKey::Left,
        Key::RightArrow => NamedKey::Right,
        Key::ControlLeft | Key::ControlRight => NamedKey::Ctrl,
        Key::ShiftLeft | Key::ShiftRight => NamedKey::Shift,
        Key::Alt | Key::AltGr => NamedKey::Alt,
        Key::CapsLock => NamedKey::CapsLock,
        Key::F1 => NamedKey::F(1),
        Key::F2 => NamedKey::F(2),
        Key::F3 => NamedKey::F(3),
        Key::F4 => NamedKey::F(4),
        Key::F5 => NamedKey::F(5),
        Key::F6 => NamedKey::F(6),
        Key::F7 => NamedKey::F(7),
        Key::F8 => NamedKey::F(8),
        Key::F9 => NamedKey::F(9),
        Key::F10 => NamedKey::F(10),
        Key::F11 => NamedKey::F(11),
        Key::F12 => NamedKey::F(12),
        Key::Home => NamedKey::Home,
        Key::End => NamedKey::End,
        Key::PageUp => NamedKey::PageUp,
        Key::PageDown => NamedKey::PageDown,
        Key::Insert => NamedKey::Insert,
        Key::MetaLeft | Key::MetaRight => NamedKey::Meta,
        Key::NumLock => NamedKey::NumLock,
        Key::ScrollLock => NamedKey::ScrollLock,
        Key::PrintScreen => NamedKey::PrintScreen,
        Key::Pause => NamedKey::Pause,
        _ => return None,
    };

    Some(named)
}
