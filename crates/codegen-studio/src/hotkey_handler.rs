//! Global record toggle hotkey.
//!
//! Registers CTRL+SHIFT+Space and forwards its presses to the event loop, so
//! the toggle runs on the same thread as the tray menu.

use crate::{AppError, AppResult, UiEvent};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};
use tao::event_loop::EventLoopProxy;
use tracing::{info, instrument};

/// Registered record toggle hotkey.
///
/// Dropping it unregisters the hotkey.
pub struct HotkeyHandler {
    _manager: GlobalHotKeyManager,
    hotkey_id: u32,
}

impl HotkeyHandler {
    /// Register CTRL+SHIFT+Space and forward its events through `proxy`.
    ///
    /// Must be called on the event loop thread so that `WM_HOTKEY` messages
    /// are dispatched on Windows.
    #[track_caller]
    #[instrument(skip(proxy))]
    pub fn register(proxy: EventLoopProxy<UiEvent>) -> AppResult<Self> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let hotkey = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::Space);

        manager
            .register(hotkey)
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to register CTRL+SHIFT+Space: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            let _ = proxy.send_event(UiEvent::Hotkey(event));
        }));

        info!(hotkey = "CTRL+SHIFT+Space", "Global hotkey registered");

        Ok(Self {
            _manager: manager,
            hotkey_id: hotkey.id(),
        })
    }

    /// Whether `event` is a press of the record toggle.
    pub fn is_toggle(&self, event: &GlobalHotKeyEvent) -> bool {
        event.id == self.hotkey_id && event.state == HotKeyState::Pressed
    }
}
