mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod display_config;

pub(crate) use {capture_config::CaptureConfig, config::Config, display_config::DisplayConfig};

pub(crate) const DEFAULT_TARGET_APP: &str = "terminal";
pub(crate) const DEFAULT_ECHO_STDOUT: bool = true;

pub(crate) fn default_target_app() -> String {
    DEFAULT_TARGET_APP.to_string()
}

pub(crate) fn default_output_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(term_recorder_core::DEFAULT_OUTPUT_DIR)
}

pub(crate) fn default_echo_stdout() -> bool {
    DEFAULT_ECHO_STDOUT
}
