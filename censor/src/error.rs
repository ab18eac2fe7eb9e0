// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by the redaction engine.
///
/// A cancelled run is not an error; it ends with `RunOutcome::Cancelled`.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// A required input was missing or malformed before the run started.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a run is already in progress")]
    AlreadyRunning,
}

impl JobError {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
