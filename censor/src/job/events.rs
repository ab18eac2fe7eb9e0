// src/job/events.rs
use crate::models::{FileResult, RunSummary};

/// Notifications sent from the run thread to the caller.
///
/// Every run ends with exactly one terminal event: `Completed`, `Cancelled`
/// or `Failed`.
#[derive(Debug, Clone)]
pub enum JobEvent {
    Progress { current: usize, total: usize },
    FileError { file_name: String, message: String },
    Completed(Box<RunSummary>),
    /// Results gathered before the cancellation was observed.
    Cancelled { results: Vec<FileResult> },
    Failed { message: String },
}

impl JobEvent {
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed(_) | Self::Cancelled { .. } | Self::Failed { .. }
        )
    }
}
