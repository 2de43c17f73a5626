mod key_event;
mod named_key;
mod rdev_map;
mod table;

pub use {
    key_event::{KeyAction, KeyEvent, RawKeyEvent},
    named_key::NamedKey,
    table::{DISPLAY_TABLE, FILE_TABLE, TranslationTable},
};

pub(crate) use rdev_map::raw_events_from_rdev;
#[cfg(test)]
pub(crate) use rdev_map::key_events_from_parts;
