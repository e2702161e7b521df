use crate::{OutputFormat, RecorderCommand, RecorderConfig, RecorderLauncher};

use std::path::{Path, PathBuf};

fn config(url: &str, format: &str, width: &str, height: &str) -> RecorderConfig {
    RecorderConfig {
        url: url.to_string(),
        viewport_width: width.to_string(),
        viewport_height: height.to_string(),
        output_format: OutputFormat::from_name(format),
        ..RecorderConfig::default()
    }
}

fn build(config: &RecorderConfig, browser: Option<&Path>) -> Vec<String> {
    let launcher = RecorderLauncher::default();
    RecorderCommand::build(&launcher, config, Path::new("/tmp/out.py"), browser).args_lossy()
}

/// WHAT: Python recording with a full viewport produces the reference command line
/// WHY: Argument order and flags are what the recorder parses
#[test]
fn given_python_config_with_viewport_when_building_then_matches_expected_arguments() {
    // Given: The default launcher and a python config
    let cfg = config("https://example.com", "python", "1920", "1080");

    // When: Building the command
    let args = build(&cfg, None);

    // Then: Module invocation, URL, output file and viewport in order, no target
    assert_eq!(
        args,
        vec![
            "-m",
            "playwright",
            "codegen",
            "https://example.com",
            "-o",
            "/tmp/out.py",
            "--viewport-size=1920,1080",
        ]
    );
}

/// WHAT: The launcher's interpreter is the program
/// WHY: The module arguments only make sense after the interpreter
#[test]
fn given_custom_interpreter_when_building_then_program_is_interpreter() {
    // Given: A launcher pointing at a specific interpreter
    let launcher = RecorderLauncher {
        interpreter: "/opt/python/bin/python3".to_string(),
        ..RecorderLauncher::default()
    };

    // When: Building the command
    let command = RecorderCommand::build(
        &launcher,
        &RecorderConfig::default(),
        Path::new("/tmp/out.py"),
        None,
    );

    // Then: That interpreter is launched
    assert_eq!(command.program(), "/opt/python/bin/python3");
}

/// WHAT: Each known format maps to the expected --target flag
/// WHY: python is the recorder default and must not be passed explicitly
#[test]
fn given_each_known_format_when_building_then_target_flag_matches() {
    let cases = [
        ("python", None),
        ("python-async", Some("--target=python-async")),
        ("javascript", Some("--target=javascript")),
        ("java", Some("--target=java")),
        ("csharp", Some("--target=csharp")),
    ];

    for (format, expected) in cases {
        // Given: A config with this format
        let cfg = config("https://example.com", format, "", "");

        // When: Building the command
        let args = build(&cfg, None);

        // Then: Exactly the expected target flag is present
        let targets: Vec<&String> = args.iter().filter(|a| a.starts_with("--target")).collect();
        match expected {
            Some(flag) => assert_eq!(targets, vec![flag], "format {}", format),
            None => assert!(targets.is_empty(), "format {}", format),
        }
    }
}

/// WHAT: Missing or non-numeric viewport fields drop the flag silently
/// WHY: Half-typed viewport input must not block a recording
#[test]
fn given_incomplete_or_invalid_viewport_when_building_then_flag_absent() {
    let cases = [("", "1080"), ("1920", ""), ("wide", "1080"), ("1920", "-5"), ("", "")];

    for (width, height) in cases {
        // Given: A config with an unusable viewport
        let cfg = config("https://example.com", "python", width, height);

        // When: Building the command
        let args = build(&cfg, None);

        // Then: No viewport flag
        assert!(
            !args.iter().any(|a| a.starts_with("--viewport-size")),
            "viewport {:?}x{:?}",
            width,
            height
        );
    }
}

/// WHAT: An empty URL is left out of the command line
/// WHY: The recorder then opens a blank page instead of an empty argument
#[test]
fn given_empty_url_when_building_then_no_positional_url() {
    // Given: A config with no URL
    let cfg = config("  ", "python", "", "");

    // When: Building the command
    let args = build(&cfg, None);

    // Then: The output flag directly follows the module invocation
    assert_eq!(args, vec!["-m", "playwright", "codegen", "-o", "/tmp/out.py"]);
}

/// WHAT: A bundled browser routes the recorder through it
/// WHY: Recording must use the same browser build the script will run in
#[test]
fn given_bundled_browser_when_building_then_browser_flags_appended_last() {
    // Given: A bundled browser path
    let browser = PathBuf::from("/cache/camoufox/firefox/firefox");
    let cfg = config("https://example.com", "javascript", "800", "600");

    // When: Building the command
    let args = build(&cfg, Some(&browser));

    // Then: Browser flags close the argument list
    assert_eq!(
        &args[args.len() - 4..],
        &[
            "--browser",
            "firefox",
            "--browser-path",
            "/cache/camoufox/firefox/firefox"
        ]
    );
    assert!(args.contains(&"--target=javascript".to_string()));
    assert!(args.contains(&"--viewport-size=800,600".to_string()));
}
