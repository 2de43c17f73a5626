use crate::config::default_echo_stdout;

use serde::{Deserialize, Serialize};

/// Live display log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mirror captured keys to standard output.
    #[serde(default = "default_echo_stdout")]
    pub echo_stdout: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            echo_stdout: default_echo_stdout(),
        }
    }
}
