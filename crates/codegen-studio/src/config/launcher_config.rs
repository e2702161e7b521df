use crate::config::{BROWSER_CACHE_DIR, default_stop_timeout_secs};

use std::{path::PathBuf, time::Duration};

use codegen_studio_core::{MAX_STOP_TIMEOUT, RecorderLauncher};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

/// How the recorder is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Interpreter executable (`python3`, or `python` on Windows).
    pub interpreter: String,
    /// Arguments selecting the recorder module.
    pub module_args: Vec<String>,
    /// Where the bundled browser is installed (default: `<user cache>/camoufox`).
    pub browser_install_dir: Option<PathBuf>,
    /// Seconds to wait after a terminate request before killing the recorder.
    /// Values above [`MAX_STOP_TIMEOUT`] are capped.
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: u64,
}

impl LauncherConfig {
    /// Resolve into a launcher, filling in the default browser location.
    pub fn to_launcher(&self) -> RecorderLauncher {
        let browser_install_dir = self
            .browser_install_dir
            .clone()
            .or_else(|| BaseDirs::new().map(|dirs| dirs.cache_dir().join(BROWSER_CACHE_DIR)));

        RecorderLauncher {
            interpreter: self.interpreter.clone(),
            module_args: self.module_args.clone(),
            browser_install_dir,
            stop_timeout: Duration::from_secs(self.stop_timeout_secs).min(MAX_STOP_TIMEOUT),
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let launcher = RecorderLauncher::default();
        Self {
            interpreter: launcher.interpreter,
            module_args: launcher.module_args,
            browser_install_dir: None,
            stop_timeout_secs: default_stop_timeout_secs(),
        }
    }
}
