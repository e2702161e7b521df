use crate::{Notifier, TrayManager};

use codegen_studio_core::{ControlState, Notice, Presenter, StatusColor};
use tracing::{debug, error};

/// Presentation layer backed by the tray and desktop notifications.
pub struct TrayPresenter {
    tray: TrayManager,
    notifier: Notifier,
}

impl TrayPresenter {
    /// Present through `tray`, notifying through `notifier`.
    pub fn new(tray: TrayManager, notifier: Notifier) -> Self {
        Self { tray, notifier }
    }
}

impl Presenter for TrayPresenter {
    fn set_status(&mut self, text: &str, color: StatusColor) {
        if let Err(e) = self.tray.set_status(text, color) {
            error!(error = ?e, "Failed to update tray status");
        }
    }

    fn show_script(&mut self, script: Option<&str>) {
        // The script itself is reached through the Open/Copy items.
        match script {
            Some(script) => debug!(lines = script.lines().count(), "Script available"),
            None => debug!("Script cleared"),
        }
    }

    fn set_controls(&mut self, controls: ControlState) {
        self.tray.set_controls(controls);
    }

    fn notify(&mut self, notice: Notice) {
        self.notifier.show(&notice);
    }
}
