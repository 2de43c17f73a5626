//! One run's recording state: the armed flag and the append-only key file.

use crate::{CoreResult, RecorderError};

use std::{
    fs::{self, OpenOptions},
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use chrono::{Local, NaiveDateTime};
use error_location::ErrorLocation;
use tracing::{info, instrument};
use uuid::Uuid;

/// Default folder for session files, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "recorded_files";

/// Recording session for the lifetime of the process.
///
/// The armed flag is written from the UI side and read on the listener
/// thread, so it is a lone atomic with no other state tied to it. The file is
/// created empty at construction and reopened in append mode for every write;
/// no handle is held between events.
#[derive(Debug)]
pub struct RecordingSession {
    session_id: Uuid,
    path: PathBuf,
    armed: AtomicBool,
}

impl RecordingSession {
    /// Start a session stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns error if the output directory or session file cannot be created.
    #[track_caller]
    pub fn start<P: AsRef<Path>>(output_dir: P) -> CoreResult<Self> {
        Self::start_at(output_dir, Local::now().naive_local())
    }

    /// Start a session stamped with `started_at`.
    ///
    /// # Errors
    ///
    /// Returns error if the output directory or session file cannot be created.
    #[track_caller]
    #[instrument(skip(output_dir), fields(output_dir = ?output_dir.as_ref()))]
    pub fn start_at<P: AsRef<Path>>(output_dir: P, started_at: NaiveDateTime) -> CoreResult<Self> {
        let output_dir = output_dir.as_ref();

        fs::create_dir_all(output_dir).map_err(|source| RecorderError::SessionFileCreate {
            path: output_dir.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = output_dir.join(Self::file_name(started_at));

        // Create without truncating, so a second session in the same second
        // keeps the earlier keys.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| RecorderError::SessionFileCreate {
                path: path.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let session_id = Uuid::new_v4();

        info!(session_id = %session_id, path = ?path, "Recording session created");

        Ok(Self {
            session_id,
            path,
            armed: AtomicBool::new(false),
        })
    }

    /// Session file name for a start time: `recorded_keys<YYYY-MM-DD_HH-MM-SS>.log`.
    pub fn file_name(started_at: NaiveDateTime) -> String {
        format!(
            "recorded_keys{}.log",
            started_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// Whether keystrokes are currently being recorded.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Start recording. Returns `false` if already armed.
    pub fn arm(&self) -> bool {
        let changed = !self.armed.swap(true, Ordering::AcqRel);
        if changed {
            info!(session_id = %self.session_id, "Recording armed");
        }
        changed
    }

    /// Stop recording. Returns `false` if already disarmed.
    pub fn disarm(&self) -> bool {
        let changed = self.armed.swap(false, Ordering::AcqRel);
        if changed {
            info!(session_id = %self.session_id, "Recording disarmed");
        }
        changed
    }

    /// Path of the session file.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Session ID for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append raw text to the session file.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::FileWriteFailed`] if the file cannot be
    /// opened or written.
    #[track_caller]
    pub fn append(&self, text: &str) -> CoreResult<()> {
        let write_failed = |source| RecorderError::FileWriteFailed {
            path: self.path.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_failed)?;

        file.write_all(text.as_bytes()).map_err(write_failed)
    }
}
