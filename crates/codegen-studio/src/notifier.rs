use codegen_studio_core::{Notice, NoticeLevel};
use notify_rust::{Notification, Timeout};
use tracing::{info, warn};

const APP_NAME: &str = "Codegen Studio";

/// Desktop notifications for user-visible notices.
#[derive(Debug, Default)]
pub struct Notifier;

impl Notifier {
    /// Show a notice. Failures are logged; the notice is always logged too.
    pub fn show(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Error | NoticeLevel::Warning => {
                warn!(title = %notice.title, message = %notice.message, "Notice")
            }
            NoticeLevel::Info => info!(title = %notice.title, message = %notice.message, "Notice"),
        }

        let timeout = match notice.level {
            NoticeLevel::Error => Timeout::Milliseconds(10_000),
            NoticeLevel::Warning | NoticeLevel::Info => Timeout::Milliseconds(5_000),
        };

        if let Err(e) = Notification::new()
            .appname(APP_NAME)
            .summary(&notice.title)
            .body(&notice.message)
            .timeout(timeout)
            .show()
        {
            warn!(error = %e, "Failed to show desktop notification");
        }
    }
}
