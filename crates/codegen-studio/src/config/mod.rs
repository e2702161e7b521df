#[allow(clippy::module_inception)]
mod config;
mod launcher_config;
mod output_config;

pub(crate) use {config::Config, launcher_config::LauncherConfig, output_config::OutputConfig};

pub(crate) const DEFAULT_STOP_TIMEOUT_SECS: u64 = 5;

/// Directory name the bundled browser is installed under in the user cache.
pub(crate) const BROWSER_CACHE_DIR: &str = "camoufox";

pub(crate) fn default_stop_timeout_secs() -> u64 {
    DEFAULT_STOP_TIMEOUT_SECS
}
