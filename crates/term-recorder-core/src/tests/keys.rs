use crate::{
    DISPLAY_TABLE, FILE_TABLE, KeyEvent, NamedKey, RawKeyEvent,
    keys::{key_events_from_parts, raw_events_from_rdev},
};

use std::time::SystemTime;

use rdev::{Event, EventType, Key};

/// WHAT: Keys present in both tables translate to their literal entries
/// WHY: Enter must render as a newline on screen but persist as a carriage return
#[test]
fn given_keys_in_both_tables_when_translating_then_tables_diverge_as_defined() {
    // Given: Keys mapped by both tables
    let space = KeyEvent::Named(NamedKey::Space);
    let enter = KeyEvent::Named(NamedKey::Enter);
    let backspace = KeyEvent::Named(NamedKey::Backspace);
    let delete = KeyEvent::Named(NamedKey::Delete);

    // When/Then: Each table returns its own encoding
    assert_eq!(DISPLAY_TABLE.translate(&space).as_deref(), Some(" "));
    assert_eq!(FILE_TABLE.translate(&space).as_deref(), Some(" "));
    assert_eq!(DISPLAY_TABLE.translate(&enter).as_deref(), Some("\n"));
    assert_eq!(FILE_TABLE.translate(&enter).as_deref(), Some("\r"));
    assert_eq!(DISPLAY_TABLE.translate(&backspace).as_deref(), Some("\x08"));
    assert_eq!(FILE_TABLE.translate(&backspace).as_deref(), Some("\x7f"));
    assert_eq!(DISPLAY_TABLE.translate(&delete).as_deref(), Some("\x7f"));
    assert_eq!(FILE_TABLE.translate(&delete).as_deref(), Some("\x1b[3~"));
}

/// WHAT: Table sizes match their fixed definitions
/// WHY: Catches an entry silently dropped from either mapping
#[test]
fn given_fixed_tables_when_counting_entries_then_display_has_5_and_file_has_26() {
    assert_eq!(DISPLAY_TABLE.len(), 5);
    assert_eq!(FILE_TABLE.len(), 26);
    assert_eq!(DISPLAY_TABLE.name(), "display");
    assert_eq!(FILE_TABLE.name(), "file");
}

/// WHAT: Navigation and function keys use VT escape sequences in the file table
/// WHY: Persisted logs must replay into a terminal as the same keystrokes
#[test]
fn given_navigation_and_function_keys_when_translating_for_file_then_escape_sequences() {
    let cases = [
        (NamedKey::Escape, "\x1b"),
        (NamedKey::Up, "\x1b[A"),
        (NamedKey::Down, "\x1b[B"),
        (NamedKey::Right, "\x1b[C"),
        (NamedKey::Left, "\x1b[D"),
        (NamedKey::Ctrl, "\x1b[E"),
        (NamedKey::Shift, "\x1b[F"),
        (NamedKey::Alt, "\x1b[G"),
        (NamedKey::CapsLock, "\x1b[H"),
        (NamedKey::F(1), "\x1bOP"),
        (NamedKey::F(4), "\x1bOS"),
        (NamedKey::F(5), "\x1b[15~"),
        (NamedKey::F(11), "\x1b[23~"),
        (NamedKey::F(12), "\x1b[24~"),
    ];

    for (key, expected) in cases {
        assert_eq!(
            FILE_TABLE.translate(&KeyEvent::Named(key)).as_deref(),
            Some(expected),
            "{:?}",
            key
        );
    }
}

/// WHAT: Character keys pass through both tables unchanged
/// WHY: Only named keys are remapped; typed text must be preserved verbatim
#[test]
fn given_character_key_when_translating_then_payload_returned_unchanged() {
    for c in ['a', 'Z', '7', '~', 'é', '\u{3}'] {
        let event = KeyEvent::Character(c);
        let expected = c.to_string();

        assert_eq!(DISPLAY_TABLE.translate(&event).as_deref(), Some(expected.as_str()));
        assert_eq!(FILE_TABLE.translate(&event).as_deref(), Some(expected.as_str()));
    }
}

/// WHAT: Named keys missing from a table have no translation
/// WHY: They carry no character payload to fall back on
#[test]
fn given_unmapped_named_key_when_translating_then_none() {
    assert_eq!(DISPLAY_TABLE.translate(&KeyEvent::Named(NamedKey::Escape)), None);
    assert_eq!(FILE_TABLE.translate(&KeyEvent::Named(NamedKey::Home)), None);
    assert_eq!(FILE_TABLE.translate(&KeyEvent::Named(NamedKey::Unknown(42))), None);
}

/// WHAT: Named rdev keys win over the reported character
/// WHY: The hook reports " " for space; it must still hit the table entry
#[test]
fn given_rdev_space_with_name_when_converting_then_named_space() {
    assert_eq!(
        key_events_from_parts(Key::Space, Some(" ")),
        vec![KeyEvent::Named(NamedKey::Space)]
    );
    assert_eq!(
        key_events_from_parts(Key::Return, Some("\r")),
        vec![KeyEvent::Named(NamedKey::Enter)]
    );
    assert_eq!(
        key_events_from_parts(Key::ShiftRight, None),
        vec![KeyEvent::Named(NamedKey::Shift)]
    );
    assert_eq!(
        key_events_from_parts(Key::F9, None),
        vec![KeyEvent::Named(NamedKey::F(9))]
    );
}

/// WHAT: Printable rdev keys become characters; bare unknown keys keep their code
/// WHY: Shifted and layout-dependent characters come from the hook's name, not the key
#[test]
fn given_rdev_printable_key_when_converting_then_character_from_name() {
    assert_eq!(
        key_events_from_parts(Key::KeyA, Some("A")),
        vec![KeyEvent::Character('A')]
    );
    assert_eq!(
        key_events_from_parts(Key::Num1, Some("!")),
        vec![KeyEvent::Character('!')]
    );
    assert_eq!(
        key_events_from_parts(Key::Unknown(179), None),
        vec![KeyEvent::Named(NamedKey::Unknown(179))]
    );
    assert_eq!(
        key_events_from_parts(Key::KeyA, Some("")),
        vec![KeyEvent::Named(NamedKey::Unknown(0))]
    );
}

/// WHAT: A multi-character name yields one character event per char, in order
/// WHY: A dead key followed by a letter it cannot combine with reports both
///      characters at once; dropping the tail would lose typed text
#[test]
fn given_dead_key_pair_name_when_converting_then_every_char_kept() {
    // Given: The hook reports an uncombined acute accent plus the letter
    let name = Some("\u{b4}e");

    // When: Converting the notification
    let events = key_events_from_parts(Key::KeyE, name);

    // Then: Both characters survive, accent first
    assert_eq!(
        events,
        vec![KeyEvent::Character('\u{b4}'), KeyEvent::Character('e')]
    );
}

/// WHAT: Every character of a multi-character press reaches the pipeline as a press
/// WHY: The listener forwards each converted event, so action must be copied to all
#[test]
fn given_multi_char_press_when_converting_rdev_event_then_one_press_per_char() {
    let event = Event {
        time: SystemTime::now(),
        name: Some("^a".to_string()),
        event_type: EventType::KeyPress(Key::KeyA),
    };

    let raws = raw_events_from_rdev(&event);

    assert_eq!(
        raws,
        vec![
            RawKeyEvent::press(KeyEvent::Character('^')),
            RawKeyEvent::press(KeyEvent::Character('a')),
        ]
    );
}

/// WHAT: Press/release are preserved and mouse events are dropped
/// WHY: Only key-down notifications may reach the sinks
#[test]
fn given_rdev_events_when_converting_then_action_preserved_and_mouse_ignored() {
    let press = Event {
        time: SystemTime::now(),
        name: Some("q".to_string()),
        event_type: EventType::KeyPress(Key::KeyQ),
    };
    let release = Event {
        time: SystemTime::now(),
        name: None,
        event_type: EventType::KeyRelease(Key::Tab),
    };
    let mouse = Event {
        time: SystemTime::now(),
        name: None,
        event_type: EventType::MouseMove { x: 1.0, y: 2.0 },
    };

    assert_eq!(
        raw_events_from_rdev(&press),
        vec![RawKeyEvent::press(KeyEvent::Character('q'))]
    );
    assert_eq!(
        raw_events_from_rdev(&release),
        vec![RawKeyEvent::release(KeyEvent::Named(NamedKey::Tab))]
    );
    assert!(raw_events_from_rdev(&mouse).is_empty());
}
