//! Read-only transcript of captured keys.
//!
//! Lives on the UI thread. Text arrives from the listener thread as
//! [`TrayCommand::AppendDisplay`](crate::TrayCommand::AppendDisplay) through
//! the event loop proxy wrapped by [`ProxyDisplaySink`]. The tray's "Show
//! transcript" item saves it next to the session file and opens it.

use crate::{AppResult, TrayCommand};

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tao::event_loop::EventLoopProxy;
use term_recorder_core::DisplaySink;
use tracing::{info, instrument, warn};

const TRANSCRIPT_EXTENSION: &str = "transcript.txt";

/// Where the transcript of `session_file` is saved: same directory and stem,
/// `.transcript.txt` extension.
pub fn transcript_path(session_file: &Path) -> PathBuf {
    session_file.with_extension(TRANSCRIPT_EXTENSION)
}

/// In-memory display surface, optionally mirrored to stdout.
#[derive(Debug, Default)]
pub struct DisplayLog {
    text: String,
    echo_stdout: bool,
}

impl DisplayLog {
    /// Create an empty log.
    pub fn new(echo_stdout: bool) -> Self {
        Self {
            text: String::new(),
            echo_stdout,
        }
    }

    /// Append text exactly as received; control characters are kept.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);

        if self.echo_stdout {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
                warn!(error = %e, "Failed to mirror display log to stdout");
            }
        }
    }

    /// Everything appended so far.
    pub fn contents(&self) -> &str {
        &self.text
    }

    /// Overwrite `path` with the current contents.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        fs::write(path, self.contents())?;
        info!(bytes = self.text.len(), "Transcript saved");
        Ok(())
    }
}

/// [`DisplaySink`] that marshals text onto the UI thread.
pub struct ProxyDisplaySink {
    proxy: Mutex<EventLoopProxy<TrayCommand>>,
}

impl ProxyDisplaySink {
    /// Wrap an event loop proxy.
    pub fn new(proxy: EventLoopProxy<TrayCommand>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl DisplaySink for ProxyDisplaySink {
    fn append(&self, text: &str) {
        let proxy = match self.proxy.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if proxy
            .send_event(TrayCommand::AppendDisplay(text.to_string()))
            .is_err()
        {
            warn!("Event loop closed, dropping display text");
        }
    }
}
