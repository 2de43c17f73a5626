use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Capture pipeline errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// The session output directory or file could not be created.
    #[error("Failed to create session file at {path:?}: {source} {location}")]
    SessionFileCreate {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Appending a translated key to the session file failed.
    #[error("Failed to append to {path:?}: {source} {location}")]
    FileWriteFailed {
        /// Session file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The foreground application could not be determined.
    #[error("Foreground probe unavailable: {reason} {location}")]
    ProbeUnavailable {
        /// Description of the probe failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The global keyboard hook failed.
    #[error("Key listener failed: {reason} {location}")]
    ListenerFailed {
        /// Description of the listener failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
