use crate::{RecorderLauncher, browser_executable_in, log_path_for, temp_output_path};

use std::path::Path;

use uuid::Uuid;

/// WHAT: Bundled browser is found when its executable exists
/// WHY: Recording should go through the bundled build when installed
#[test]
#[allow(clippy::unwrap_used)]
fn given_installed_browser_when_resolving_then_returns_executable_path() {
    // Given: An install dir containing the browser executable
    let dir = tempfile::tempdir().unwrap();
    let executable = browser_executable_in(dir.path());
    std::fs::create_dir_all(executable.parent().unwrap()).unwrap();
    std::fs::write(&executable, b"").unwrap();

    let launcher = RecorderLauncher {
        browser_install_dir: Some(dir.path().to_path_buf()),
        ..RecorderLauncher::default()
    };

    // When: Resolving the bundled browser
    let browser = launcher.bundled_browser();

    // Then: The executable path is returned
    assert_eq!(browser, Some(executable));
}

/// WHAT: No bundled browser when the install dir is empty or unset
/// WHY: The recorder falls back to its own default browser
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_browser_when_resolving_then_none() {
    // Given: An empty install dir and an unset one
    let dir = tempfile::tempdir().unwrap();
    let empty = RecorderLauncher {
        browser_install_dir: Some(dir.path().to_path_buf()),
        ..RecorderLauncher::default()
    };
    let unset = RecorderLauncher::default();

    // When/Then: Neither resolves
    assert_eq!(empty.bundled_browser(), None);
    assert_eq!(unset.bundled_browser(), None);
}

/// WHAT: Temp output paths carry the session id and extension
/// WHY: Concurrent app instances must not share output files
#[test]
fn given_session_id_when_allocating_output_then_unique_path_with_extension() {
    // Given: Two session ids
    let first = temp_output_path(Uuid::new_v4(), "js");
    let second = temp_output_path(Uuid::new_v4(), "js");

    // Then: Distinct paths with the requested extension
    assert_ne!(first, second);
    assert_eq!(first.extension().and_then(|e| e.to_str()), Some("js"));
    assert!(first.starts_with(std::env::temp_dir()));
}

/// WHAT: The capture log sits next to the output file
/// WHY: Both are left for OS temp cleanup together
#[test]
fn given_output_file_when_deriving_log_path_then_suffix_appended() {
    let log = log_path_for(Path::new("/tmp/codegen-1.py"));

    assert_eq!(log, Path::new("/tmp/codegen-1.py.log"));
}
