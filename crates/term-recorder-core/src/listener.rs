//! Global keyboard hook on a dedicated thread.

use crate::{
    CapturePipeline, CoreResult, DisplaySink, ForegroundProbe, RecorderError,
    keys::raw_events_from_rdev,
};

use std::{
    panic::Location,
    sync::Arc,
    thread::{self, JoinHandle},
};

use error_location::ErrorLocation;
use rdev::{Event, listen};
use tracing::{error, info, instrument};

/// Runs `rdev::listen` and feeds every keyboard event through a
/// [`CapturePipeline`].
pub struct KeyListener;

impl KeyListener {
    /// Spawn the listener thread.
    ///
    /// The thread runs for the lifetime of the process. Pipeline errors and
    /// a failing hook are reported through `on_error`; nothing panics across
    /// the hook boundary.
    ///
    /// # Errors
    ///
    /// Returns error if the thread cannot be spawned.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn spawn<P, S, F>(
        pipeline: CapturePipeline<P>,
        sink: S,
        on_error: F,
    ) -> CoreResult<JoinHandle<()>>
    where
        P: ForegroundProbe + 'static,
        S: DisplaySink + 'static,
        F: Fn(RecorderError) + Send + Sync + 'static,
    {
        let on_error = Arc::new(on_error);

        let handle = thread::Builder::new()
            .name("key-listener".to_string())
            .spawn(move || {
                let report = Arc::clone(&on_error);
                let callback = move |event: Event| {
                    for raw in raw_events_from_rdev(&event) {
                        if let Err(e) = pipeline.handle(raw, &sink) {
                            report(e);
                        }
                    }
                };

                info!("Key listener started");

                // listen() blocks until the hook fails.
                if let Err(e) = listen(callback) {
                    error!(error = ?e, "Key listener stopped");
                    on_error(RecorderError::ListenerFailed {
                        reason: format!("{:?}", e),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            })
            .map_err(|e| RecorderError::ListenerFailed {
                reason: format!("Failed to spawn listener thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(handle)
    }
}
