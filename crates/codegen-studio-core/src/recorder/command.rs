use crate::recorder::{RecorderConfig, RecorderLauncher};

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Fully resolved recorder invocation.
///
/// Built once per session and kept around so the exact argument list can be
/// logged and inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderCommand {
    program: String,
    args: Vec<OsString>,
}

impl RecorderCommand {
    /// Build the recorder command line.
    ///
    /// Argument order: module invocation, URL (when non-empty), `-o <file>`,
    /// `--target`, `--viewport-size`, then the bundled browser flags.
    pub fn build(
        launcher: &RecorderLauncher,
        config: &RecorderConfig,
        output_file: &Path,
        browser: Option<&Path>,
    ) -> Self {
        let mut args: Vec<OsString> = launcher.module_args.iter().map(OsString::from).collect();

        let url = config.target_url();
        if !url.is_empty() {
            args.push(url.into());
        }

        args.push("-o".into());
        args.push(output_file.as_os_str().to_os_string());

        if let Some(target) = config.output_format.target_flag() {
            args.push(target.into());
        }

        if let Some(viewport) = config.viewport() {
            args.push(format!("--viewport-size={},{}", viewport.width, viewport.height).into());
        }

        if let Some(browser) = browser {
            args.push("--browser".into());
            args.push("firefox".into());
            args.push("--browser-path".into());
            args.push(browser.as_os_str().to_os_string());
        }

        Self {
            program: launcher.interpreter.clone(),
            args,
        }
    }

    /// Executable that is launched.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the executable.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as lossy strings, for logging and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// A [`Command`] ready to spawn with both output streams sent to `log`.
    pub(crate) fn to_command(&self, log: Stdio, log_err: Stdio) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(log)
            .stderr(log_err);
        command
    }
}

/// Fresh temporary output path for a session, `codegen-<id>.<ext>`.
pub fn temp_output_path(session_id: uuid::Uuid, extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("codegen-{}.{}", session_id, extension))
}

/// Capture file for the recorder's stdout and stderr, next to its output file.
pub fn log_path_for(output_file: &Path) -> PathBuf {
    let mut name = output_file.as_os_str().to_os_string();
    name.push(".log");
    PathBuf::from(name)
}
