use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::debug;

/// Default time a recorder is given to exit after a graceful stop request.
pub const DEFAULT_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest grace period honored before a stopped recorder is killed.
pub const MAX_STOP_TIMEOUT: Duration = Duration::from_secs(60);

#[cfg(target_os = "windows")]
const DEFAULT_INTERPRETER: &str = "python";
#[cfg(not(target_os = "windows"))]
const DEFAULT_INTERPRETER: &str = "python3";

#[cfg(target_os = "windows")]
const BROWSER_EXECUTABLE: &str = "firefox.exe";
#[cfg(not(target_os = "windows"))]
const BROWSER_EXECUTABLE: &str = "firefox";

/// How the recorder is launched and supervised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderLauncher {
    /// Interpreter executable.
    pub interpreter: String,
    /// Arguments that select the recorder module, e.g. `-m playwright codegen`.
    pub module_args: Vec<String>,
    /// Directory holding the bundled browser build, if any.
    pub browser_install_dir: Option<PathBuf>,
    /// Grace period between the terminate request and a forced kill,
    /// capped at [`MAX_STOP_TIMEOUT`].
    pub stop_timeout: Duration,
}

impl RecorderLauncher {
    /// Path of the bundled browser executable, if it is installed.
    pub fn bundled_browser(&self) -> Option<PathBuf> {
        let install_dir = self.browser_install_dir.as_deref()?;
        let path = browser_executable_in(install_dir);

        if path.is_file() {
            Some(path)
        } else {
            debug!(path = ?path, "No bundled browser, recorder uses its default");
            None
        }
    }
}

impl Default for RecorderLauncher {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            module_args: vec![
                "-m".to_string(),
                "playwright".to_string(),
                "codegen".to_string(),
            ],
            browser_install_dir: None,
            stop_timeout: DEFAULT_STOP_TIMEOUT,
        }
    }
}

/// Expected location of the browser executable inside an install directory.
pub fn browser_executable_in(install_dir: &Path) -> PathBuf {
    install_dir.join("firefox").join(BROWSER_EXECUTABLE)
}
