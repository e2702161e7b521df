mod command;
mod launcher;
mod output_format;
mod recorder_config;
mod supervisor;

pub use {
    command::{RecorderCommand, log_path_for, temp_output_path},
    launcher::{DEFAULT_STOP_TIMEOUT, MAX_STOP_TIMEOUT, RecorderLauncher, browser_executable_in},
    output_format::OutputFormat,
    recorder_config::{RecorderConfig, Viewport},
    supervisor::RecorderHandle,
};

pub(crate) use supervisor::supervise;
