use crate::{
    AppCommand, AppError, AppResult, MenuAction, SessionAction, TrayCommand, TrayMenuIds,
    display_log::transcript_path,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use term_recorder_core::RecordingSession;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Runs on the async runtime thread. Owns the user-intent side of the
/// recording session (arm/disarm) and sends UI updates back to the main
/// thread via `tray_proxy` because `TrayIcon` is `!Send` and must remain on
/// the UI thread.
pub struct App {
    pub(crate) session: Arc<RecordingSession>,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) menu_ids: TrayMenuIds,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!(
            session_id = %self.session.session_id(),
            path = ?self.session.file_path(),
            "Term-Recorder starting"
        );

        // MenuEvent::receiver() is a blocking crossbeam receiver; forward it
        // from one persistent blocking task. When tray_event_rx is dropped the
        // next blocking_send fails and the task ends.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                Some(event) = tray_event_rx.recv() => {
                    match self.handle_tray_event(event) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => error!(error = ?e, "Failed to handle tray event"),
                    }
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::WriteFailed { reason } => {
                            error!(
                                session_id = %self.session.session_id(),
                                reason = %reason,
                                "Recording stopped: session file write failed"
                            );
                            if let Err(e) = self.apply(SessionAction::WriteFailed) {
                                error!(error = ?e, "Failed to update tray state");
                            }
                        }
                        AppCommand::ListenerFailed { reason } => {
                            error!(reason = %reason, "Key listener failed, no further keys will be captured");
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
        info!("Term-Recorder shut down successfully");

        Ok(())
    }

    /// Handle a tray menu click. Returns `false` when the app should exit.
    #[instrument(skip(self))]
    pub(crate) fn handle_tray_event(&self, event: MenuEvent) -> AppResult<bool> {
        match self.menu_ids.action_for(&event.id) {
            Some(MenuAction::Record) => self.apply(SessionAction::Record)?,
            Some(MenuAction::Stop) => self.apply(SessionAction::Stop)?,
            Some(MenuAction::ShowTranscript) => {
                let path = transcript_path(self.session.file_path());
                self.send(TrayCommand::ShowTranscript(path))?;
            }
            Some(MenuAction::Exit) => {
                info!("Exit requested from tray menu");
                return Ok(false);
            }
            None => warn!(id = ?event.id, "Unknown tray menu item"),
        }

        Ok(true)
    }

    #[track_caller]
    fn apply(&self, action: SessionAction) -> AppResult<()> {
        match action.apply(&self.session) {
            Some(state) => self.send(TrayCommand::SetState(state)),
            None => Ok(()),
        }
    }

    #[track_caller]
    fn send(&self, command: TrayCommand) -> AppResult<()> {
        self.tray_proxy
            .send_event(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send tray command: {:?}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
