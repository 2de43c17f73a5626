//! Per-key capture state machine.
//!
//! Idle/Recording lives in the shared [`RecordingSession`]; this type owns
//! the gate (foreground match) and the fan-out to the two sinks.

use crate::{
    CaptureOutcome, CoreResult, DISPLAY_TABLE, DisplaySink, FILE_TABLE, ForegroundProbe,
    IgnoreReason, KeyAction, RawKeyEvent, RecordingSession,
};

use std::sync::Arc;

use tracing::{debug, error, info, instrument, trace};

/// Gates key events on the foreground application and the armed flag, then
/// writes them to the session file and the display surface.
pub struct CapturePipeline<P> {
    probe: P,
    session: Arc<RecordingSession>,
    target_app: String,
}

impl<P: ForegroundProbe> CapturePipeline<P> {
    /// Create a pipeline matching foreground names against `target_app`.
    ///
    /// The target is lower-cased once here; the probed name is lower-cased
    /// per event.
    #[instrument(skip(probe, session))]
    pub fn new(probe: P, session: Arc<RecordingSession>, target_app: &str) -> Self {
        let target_app = target_app.to_lowercase();

        info!(
            session_id = %session.session_id(),
            target_app = %target_app,
            "Capture pipeline ready"
        );

        Self {
            probe,
            session,
            target_app,
        }
    }

    /// Lower-cased target substring.
    pub fn target_app(&self) -> &str {
        &self.target_app
    }

    /// Process one raw key notification.
    ///
    /// On an accepted event the file is written first and the display only
    /// after the write succeeded, so the two sinks never disagree on which
    /// keys were captured.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::FileWriteFailed`](crate::RecorderError::FileWriteFailed)
    /// if the append fails. The session is disarmed before returning so that
    /// later keys are not silently lost one by one.
    pub fn handle(&self, event: RawKeyEvent, display: &dyn DisplaySink) -> CoreResult<CaptureOutcome> {
        if event.action == KeyAction::Release {
            return Ok(CaptureOutcome::Ignored(IgnoreReason::KeyRelease));
        }

        let app_name = match self.probe.foreground_app_name() {
            Ok(name) => name.to_lowercase(),
            Err(e) => {
                trace!(error = %e, "Foreground probe failed, discarding key");
                return Ok(CaptureOutcome::Ignored(IgnoreReason::ProbeFailed));
            }
        };

        if !app_name.contains(&self.target_app) {
            return Ok(CaptureOutcome::Ignored(IgnoreReason::NotTargetApp));
        }

        if !self.session.is_armed() {
            return Ok(CaptureOutcome::Ignored(IgnoreReason::Disarmed));
        }

        let display_text = DISPLAY_TABLE.translate(&event.key);
        let file_text = FILE_TABLE.translate(&event.key);

        if display_text.is_none() && file_text.is_none() {
            debug!(
                key = ?event.key,
                tables = ?[DISPLAY_TABLE.name(), FILE_TABLE.name()],
                "Key has no translation, discarding"
            );
            return Ok(CaptureOutcome::Ignored(IgnoreReason::Untranslatable));
        }

        for (table, text) in [(&DISPLAY_TABLE, &display_text), (&FILE_TABLE, &file_text)] {
            if text.is_none() {
                trace!(key = ?event.key, table = table.name(), "No entry, sink gets empty text");
            }
        }

        let display_text = display_text.unwrap_or_default();
        let file_text = file_text.unwrap_or_default();

        if !file_text.is_empty() {
            self.append_to_file(&file_text)?;
        }

        if !display_text.is_empty() {
            display.append(&display_text);
        }

        trace!(key = ?event.key, "Key recorded");

        Ok(CaptureOutcome::Recorded {
            display: display_text.into_owned(),
            file: file_text.into_owned(),
        })
    }

    fn append_to_file(&self, text: &str) -> CoreResult<()> {
        self.session.append(text).inspect_err(|e| {
            error!(
                session_id = %self.session.session_id(),
                error = %e,
                "Session file write failed, disarming"
            );
            self.session.disarm();
        })
    }
}
