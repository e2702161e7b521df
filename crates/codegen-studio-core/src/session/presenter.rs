/// Color hint for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Ready, completed or saved.
    Green,
    /// Recording or failed.
    Red,
    /// Stopped by the user.
    Orange,
    /// Output cleared.
    Blue,
}

/// Which controls the presentation layer should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// A recording is running; the record control reads "Stop".
    pub recording: bool,
    /// A script is available to save.
    pub save_enabled: bool,
    /// Clearing is allowed.
    pub clear_enabled: bool,
}

impl ControlState {
    /// Controls while a recorder runs.
    pub const RECORDING: Self = Self {
        recording: true,
        save_enabled: false,
        clear_enabled: false,
    };

    /// Controls when ready to record, with or without a script to save.
    pub const fn ready(save_enabled: bool) -> Self {
        Self {
            recording: false,
            save_enabled,
            clear_enabled: true,
        }
    }
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation.
    Info,
    /// Nothing failed, but the request did nothing.
    Warning,
    /// The request failed.
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// An error notice titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// A warning notice titled "Warning".
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    /// A confirmation notice titled "Success".
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Success".to_string(),
            message: message.into(),
        }
    }
}

/// What the session controller needs from the presentation layer.
///
/// All methods are called on the foreground thread.
pub trait Presenter {
    /// Replace the status line.
    fn set_status(&mut self, text: &str, color: StatusColor);

    /// Show a generated script, or clear the display with `None`.
    fn show_script(&mut self, script: Option<&str>);

    /// Enable or disable controls.
    fn set_controls(&mut self, controls: ControlState);

    /// Show a notification to the user.
    fn notify(&mut self, notice: Notice);
}
