//! Term-Recorder: records keystrokes typed into a target application.

mod app;
mod app_command;
mod config;
mod display_log;
mod error;
mod menu_action;
mod session_action;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    display_log::{DisplayLog, ProxyDisplaySink},
    error::{AppError, Result as AppResult},
    menu_action::MenuAction,
    session_action::SessionAction,
    tray_command::TrayCommand,
    tray_icon_state::TrayIconState,
    tray_manager::{TrayManager, TrayMenuIds},
};

use crate::config::Config;

use std::sync::Arc;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use term_recorder_core::{CapturePipeline, KeyListener, RecordingSession, SystemProbe};
use tokio::sync::mpsc;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "term_recorder=info,term_recorder_core=info";

/// Application entry point.
fn main() {
    // stdout carries the display log mirror; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut display_log = DisplayLog::new(config.display.echo_stdout);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::SetState(state) => {
                    if let Err(e) = tray_manager.update_state(state) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
                TrayCommand::AppendDisplay(text) => display_log.append(&text),
                TrayCommand::ShowTranscript(path) => {
                    if let Err(e) = display_log.save_to(&path) {
                        error!(error = ?e, "Failed to save transcript");
                    } else if let Err(e) = open::that(&path) {
                        warn!(error = %e, path = ?path, "Failed to open transcript");
                    }
                }
                TrayCommand::Shutdown => {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(tao::event::StartCause::Init) => {
                let (command_tx, command_rx) = mpsc::channel(32);

                // The session file exists from here on, before anything is armed.
                let session = match start_capture(&config, &tray_proxy, command_tx) {
                    Ok(s) => s,
                    Err(e) => {
                        error!("Failed to start capture: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let tray_proxy = tray_proxy.clone();
                let menu_ids = tray_manager.menu_ids();

                // Spawn tokio runtime on separate thread.
                // TrayManager and the display log stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App {
                            session,
                            tray_proxy,
                            command_rx,
                            menu_ids,
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            _ => {}
        }
    });
}

/// Create the session file and start the global key listener.
///
/// Listener errors are forwarded to the app loop over `command_tx`.
fn start_capture(
    config: &Config,
    tray_proxy: &EventLoopProxy<TrayCommand>,
    command_tx: mpsc::Sender<AppCommand>,
) -> AppResult<Arc<RecordingSession>> {
    let session = Arc::new(RecordingSession::start(&config.capture.output_dir)?);

    let pipeline = CapturePipeline::new(
        SystemProbe,
        Arc::clone(&session),
        &config.capture.target_app,
    );
    let sink = ProxyDisplaySink::new(tray_proxy.clone());

    let _listener = KeyListener::spawn(pipeline, sink, move |e| {
        if let Err(e) = command_tx.try_send(AppCommand::from(e)) {
            warn!(error = %e, "Failed to report listener error");
        }
    })?;

    Ok(session)
}
