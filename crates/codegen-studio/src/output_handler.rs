//! Clipboard and external-editor output for generated scripts.

use crate::{AppError, AppResult};

use std::{panic::Location, path::Path};

use arboard::Clipboard;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Output handler for clipboard and editor operations.
pub struct OutputHandler {
    pub(crate) clipboard: Clipboard,
}

impl OutputHandler {
    /// Create a new output handler.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let clipboard = Clipboard::new().map_err(|e| AppError::ClipboardError {
            reason: format!("Failed to initialize clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("OutputHandler initialized");

        Ok(Self { clipboard })
    }

    /// Copy a script to the clipboard.
    #[track_caller]
    #[instrument(skip(self, script))]
    pub fn copy_script(&mut self, script: &str) -> AppResult<()> {
        self.clipboard
            .set_text(script)
            .map_err(|e| AppError::ClipboardError {
                reason: format!("Failed to set clipboard: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(script_len = script.len(), "Script copied to clipboard");

        Ok(())
    }
}

/// Open a script file with the system's default application.
#[track_caller]
#[instrument]
pub fn open_script(path: &Path) -> AppResult<()> {
    open::that(path)?;
    info!(path = ?path, "Opened script");
    Ok(())
}
