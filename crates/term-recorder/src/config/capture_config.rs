use crate::config::{default_output_dir, default_target_app};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which application to record and where session files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Substring matched (case-insensitively) against the foreground application name.
    #[serde(default = "default_target_app")]
    pub target_app: String,

    /// Folder receiving `recorded_keys<timestamp>.log` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            target_app: default_target_app(),
            output_dir: default_output_dir(),
        }
    }
}
