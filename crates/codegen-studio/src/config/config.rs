//! Configuration loading for codegen-studio.
//!
//! The TOML file is read fresh before every recording so edits apply to the
//! next session. It is never written; a missing file means defaults.

use crate::{
    AppError, AppResult,
    config::{LauncherConfig, OutputConfig},
};

use std::{fs, panic::Location, path::PathBuf};

use codegen_studio_core::RecorderConfig;
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Options for the next recording.
    #[serde(default)]
    pub recorder: RecorderConfig,
    /// Recorder launch settings.
    #[serde(default)]
    pub launcher: LauncherConfig,
    /// Saved script settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from disk, falling back to defaults if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config {:?}: {}", config_path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::from_toml(&contents)?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            debug!(config_path = ?config_path, "No config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text. Missing sections and keys take defaults.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Location of the config file.
    #[track_caller]
    pub fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "codegen-studio", "Codegen-Studio").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
