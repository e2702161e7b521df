use crate::recorder::OutputFormat;

use serde::{Deserialize, Serialize};

/// Options for one recording, as entered by the user.
///
/// Viewport fields are kept as typed; [`RecorderConfig::viewport`] decides
/// whether they are usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Page the recorder opens first.
    pub url: String,
    /// Headless browser requested.
    pub headless: bool,
    /// Viewport width field.
    pub viewport_width: String,
    /// Viewport height field.
    pub viewport_height: String,
    /// Browser locale, e.g. `en-US`.
    pub locale: String,
    /// Target script language.
    pub output_format: OutputFormat,
}

/// A viewport whose dimensions both parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl RecorderConfig {
    /// The trimmed target URL.
    pub fn target_url(&self) -> &str {
        self.url.trim()
    }

    /// Both viewport fields as numbers, or `None` if either is blank or not a number.
    pub fn viewport(&self) -> Option<Viewport> {
        let width = self.viewport_width.trim().parse::<u32>().ok()?;
        let height = self.viewport_height.trim().parse::<u32>().ok()?;
        Some(Viewport { width, height })
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            url: "https://example.com".to_string(),
            headless: false,
            viewport_width: "1920".to_string(),
            viewport_height: "1080".to_string(),
            locale: "en-US".to_string(),
            output_format: OutputFormat::Python,
        }
    }
}
