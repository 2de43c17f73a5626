//! Term-recorder Core Library
//!
//! Captures keystrokes typed into one target application. Each key-down is
//! gated on the foreground application name and the session's armed flag,
//! then translated twice: once for on-screen display and once into the
//! terminal escape encoding persisted to the session file.
//!
//! # Example
//!
//! ```no_run
//! use term_recorder_core::{
//!     CapturePipeline, CoreResult, DisplaySink, KeyListener, RecordingSession, SystemProbe,
//! };
//!
//! use std::sync::Arc;
//!
//! struct Stdout;
//!
//! impl DisplaySink for Stdout {
//!     fn append(&self, text: &str) {
//!         print!("{}", text);
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let session = Arc::new(RecordingSession::start("recorded_files")?);
//!     let pipeline = CapturePipeline::new(SystemProbe, Arc::clone(&session), "terminal");
//!
//!     session.arm();
//!     let handle = KeyListener::spawn(pipeline, Stdout, |e| eprintln!("{}", e))?;
//!     let _ = handle.join();
//!     Ok(())
//! }
//! ```

mod error;
mod keys;
mod listener;
mod pipeline;
mod probe;
mod session;

pub use {
    error::{RecorderError, Result as CoreResult},
    keys::{DISPLAY_TABLE, FILE_TABLE, KeyAction, KeyEvent, NamedKey, RawKeyEvent, TranslationTable},
    listener::KeyListener,
    pipeline::{CaptureOutcome, CapturePipeline, DisplaySink, IgnoreReason},
    probe::{ForegroundProbe, SystemProbe, current_foreground_app_name},
    session::{DEFAULT_OUTPUT_DIR, RecordingSession},
};

#[cfg(all(test, target_os = "linux"))]
pub(crate) use probe::helper_output;

#[cfg(test)]
mod tests;
