use codegen_studio_core::SessionEvent;
use global_hotkey::GlobalHotKeyEvent;
use tray_icon::menu::MenuEvent;

/// Events delivered to the main thread's event loop.
///
/// Everything that changes session or tray state arrives here, so all of it
/// is applied on the thread that owns the tray.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A tray menu item was clicked.
    Menu(MenuEvent),
    /// The global hotkey fired.
    Hotkey(GlobalHotKeyEvent),
    /// A recorder worker reported back.
    Session(SessionEvent),
}
