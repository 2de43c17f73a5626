use crate::{AppError, config::Config};

use std::fs;
use std::path::PathBuf;

/// WHAT: Missing config file is created with defaults
/// WHY: First launch must work without any setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_config_when_loading_then_defaults_written() {
    // Given: A config path in an empty directory
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults are used and persisted
    assert_eq!(config.capture.target_app, "terminal");
    assert_eq!(config.capture.output_dir, PathBuf::from("recorded_files"));
    assert!(config.display.echo_stdout);
    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Target substring is trimmed and lower-cased on load
/// WHY: Matching is case-insensitive against lower-cased window names
#[test]
#[allow(clippy::unwrap_used)]
fn given_mixed_case_target_when_loading_then_lowercased() {
    // Given: A config with a mixed-case target and custom output dir
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        "[capture]\ntarget_app = \"  iTerm \"\noutput_dir = \"logs\"\n\n[display]\necho_stdout = false\n",
    )
    .unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Values are normalized
    assert_eq!(config.capture.target_app, "iterm");
    assert_eq!(config.capture.output_dir, PathBuf::from("logs"));
    assert!(!config.display.echo_stdout);
}

/// WHAT: Missing sections fall back to defaults
/// WHY: Older or hand-trimmed config files must keep loading
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_config_file_when_loading_then_defaults_used() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.capture.target_app, "terminal");
    assert!(config.display.echo_stdout);
}

/// WHAT: Empty target substring is rejected
/// WHY: An empty substring matches every window and would record everything
#[test]
#[allow(clippy::unwrap_used)]
fn given_blank_target_when_loading_then_config_error() {
    // Given: A config whose target is whitespace
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[capture]\ntarget_app = \"   \"\n").unwrap();

    // When: Loading
    let result = Config::load_from(&path);

    // Then: ConfigError
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Malformed TOML is reported as a config error
/// WHY: Startup must fail loudly instead of recording with surprising settings
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_toml_when_loading_then_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[capture\ntarget_app = 3").unwrap();

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}
