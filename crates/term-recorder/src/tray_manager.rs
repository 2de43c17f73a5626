//! System tray status indicator and Record/Stop controls.
//!
//! Shows a red (record off) or green (record on) icon and a context menu with
//! Record, Stop, Show transcript and Exit. Record and Stop are never enabled at the same time.

use crate::{AppError, AppResult, MenuAction, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;

/// Menu item IDs, `Send` so they can be handed to the app loop.
#[derive(Debug, Clone)]
pub struct TrayMenuIds {
    /// Record item.
    pub record: MenuId,
    /// Stop item.
    pub stop: MenuId,
    /// Show transcript item.
    pub show_transcript: MenuId,
    /// Exit item.
    pub exit: MenuId,
}

impl TrayMenuIds {
    /// Action behind a clicked menu item; `None` for items this menu did not create.
    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        if *id == self.record {
            Some(MenuAction::Record)
        } else if *id == self.stop {
            Some(MenuAction::Stop)
        } else if *id == self.show_transcript {
            Some(MenuAction::ShowTranscript)
        } else if *id == self.exit {
            Some(MenuAction::Exit)
        } else {
            None
        }
    }
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    record_item: MenuItem,
    stop_item: MenuItem,
    transcript_item: MenuItem,
    exit_item: MenuItem,
}

impl TrayManager {
    /// Create a new tray manager in the Idle state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let record_item = MenuItem::new("Record", true, None);
        let stop_item = MenuItem::new("Stop", false, None);
        let transcript_item = MenuItem::new("Show transcript", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        menu.append_items(&[
            &record_item,
            &stop_item,
            &PredefinedMenuItem::separator(),
            &transcript_item,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let state = TrayIconState::Idle;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(state.tooltip())
            .with_menu(Box::new(menu))
            .with_icon(Self::load_icon(state)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            record_item,
            stop_item,
            transcript_item,
            exit_item,
        })
    }

    /// Reflect a new recording state in the icon, tooltip and menu.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(Self::load_icon(state)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(state.tooltip()))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.record_item.set_enabled(state.record_enabled());
        self.stop_item.set_enabled(!state.record_enabled());

        Ok(())
    }

    /// Solid status dot in the state's colour.
    #[track_caller]
    fn load_icon(state: TrayIconState) -> AppResult<Icon> {
        Icon::from_rgba(status_dot_rgba(state.color(), ICON_SIZE), ICON_SIZE, ICON_SIZE).map_err(
            |e| AppError::TrayError {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            },
        )
    }

    /// IDs of the menu items.
    pub fn menu_ids(&self) -> TrayMenuIds {
        TrayMenuIds {
            record: self.record_item.id().clone(),
            stop: self.stop_item.id().clone(),
            show_transcript: self.transcript_item.id().clone(),
            exit: self.exit_item.id().clone(),
        }
    }
}

/// RGBA pixels of a filled circle on a transparent square.
pub(crate) fn status_dot_rgba(rgb: [u8; 3], size: u32) -> Vec<u8> {
    let radius = size as f32 / 2.0;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let alpha = if dx * dx + dy * dy <= radius * radius {
                0xFF
            } else {
                0x00
            };
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], alpha]);
        }
    }

    pixels
}
