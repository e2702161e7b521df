//! System tray icon and menu.
//!
//! The tray is the whole presentation surface: the icon color and tooltip
//! carry the session status, the menu carries the controls.

use crate::{AppError, AppResult};

use std::panic::Location;

use codegen_studio_core::{ControlState, StatusColor};
use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const APP_TITLE: &str = "Codegen Studio";
const START_LABEL: &str = "Start Recording";
const STOP_LABEL: &str = "Stop Recording";

/// Edge length of the generated status icon in pixels.
pub(crate) const ICON_SIZE: u32 = 32;

/// Ids of the tray menu items, for matching menu events.
#[derive(Debug, Clone)]
pub struct MenuIds {
    /// Start/stop toggle.
    pub record: MenuId,
    /// Save the script.
    pub save: MenuId,
    /// Copy the script to the clipboard.
    pub copy: MenuId,
    /// Open the script in the default editor.
    pub open: MenuId,
    /// Clear the output.
    pub clear: MenuId,
    /// Quit.
    pub exit: MenuId,
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    record_item: MenuItem,
    save_item: MenuItem,
    copy_item: MenuItem,
    open_item: MenuItem,
    clear_item: MenuItem,
    ids: MenuIds,
}

impl TrayManager {
    /// Create the tray icon in the ready state.
    ///
    /// Must run on the event loop thread after the loop has started.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let record_item = MenuItem::new(START_LABEL, true, None);
        let save_item = MenuItem::new("Save Script", false, None);
        let copy_item = MenuItem::new("Copy Script", false, None);
        let open_item = MenuItem::new("Open Script", false, None);
        let clear_item = MenuItem::new("Clear", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let ids = MenuIds {
            record: record_item.id().clone(),
            save: save_item.id().clone(),
            copy: copy_item.id().clone(),
            open: open_item.id().clone(),
            clear: clear_item.id().clone(),
            exit: exit_item.id().clone(),
        };

        let top_separator = PredefinedMenuItem::separator();
        let bottom_separator = PredefinedMenuItem::separator();
        let items: [&dyn IsMenuItem; 8] = [
            &record_item,
            &top_separator,
            &save_item,
            &copy_item,
            &open_item,
            &clear_item,
            &bottom_separator,
            &exit_item,
        ];

        menu.append_items(&items).map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(format!("{} - Ready to record", APP_TITLE))
            .with_menu(Box::new(menu))
            .with_icon(Self::status_icon(StatusColor::Green)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            record_item,
            save_item,
            copy_item,
            open_item,
            clear_item,
            ids,
        })
    }

    /// Show a status line as tooltip and icon color.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_status(&mut self, text: &str, color: StatusColor) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(Self::status_icon(color)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(format!("{} - {}", APP_TITLE, text)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Relabel and enable menu items.
    pub fn set_controls(&mut self, controls: ControlState) {
        self.record_item.set_text(if controls.recording {
            STOP_LABEL
        } else {
            START_LABEL
        });
        self.save_item.set_enabled(controls.save_enabled);
        self.copy_item.set_enabled(controls.save_enabled);
        self.open_item.set_enabled(controls.save_enabled);
        self.clear_item.set_enabled(controls.clear_enabled);
    }

    /// Menu item ids.
    pub fn menu_ids(&self) -> &MenuIds {
        &self.ids
    }

    #[track_caller]
    fn status_icon(color: StatusColor) -> AppResult<Icon> {
        Icon::from_rgba(status_icon_rgba(color), ICON_SIZE, ICON_SIZE).map_err(|e| {
            AppError::TrayError {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}

/// RGB for a status color.
pub(crate) fn status_rgb(color: StatusColor) -> [u8; 3] {
    match color {
        StatusColor::Green => [0x2e, 0xa0, 0x43],
        StatusColor::Red => [0xd7, 0x3a, 0x49],
        StatusColor::Orange => [0xe3, 0x8b, 0x1c],
        StatusColor::Blue => [0x1f, 0x6f, 0xeb],
    }
}

/// A filled circle of the status color on a transparent square, RGBA8.
pub(crate) fn status_icon_rgba(color: StatusColor) -> Vec<u8> {
    let [r, g, b] = status_rgb(color);
    let size = ICON_SIZE as i64;
    let center = size - 1;
    // Compare in doubled coordinates so the center sits between pixels.
    let radius_sq = (size - 2) * (size - 2);

    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = 2 * x - center;
            let dy = 2 * y - center;
            let alpha = if dx * dx + dy * dy <= radius_sq { 0xff } else { 0x00 };
            rgba.extend_from_slice(&[r, g, b, alpha]);
        }
    }
    rgba
}
