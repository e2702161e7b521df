use std::path::PathBuf;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

/// Where saved scripts go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Save directory (default: documents dir, else home dir).
    pub save_dir: Option<PathBuf>,
}

impl OutputConfig {
    /// The configured save directory, or the platform default.
    pub fn resolved_save_dir(&self) -> PathBuf {
        if let Some(dir) = &self.save_dir {
            return dir.clone();
        }

        UserDirs::new()
            .map(|dirs| {
                dirs.document_dir()
                    .map(|d| d.to_path_buf())
                    .unwrap_or_else(|| dirs.home_dir().to_path_buf())
            })
            .unwrap_or_else(std::env::temp_dir)
    }
}
