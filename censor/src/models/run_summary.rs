// src/models/run_summary.rs
use std::path::PathBuf;

use super::{FileResult, GlobalTally};

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_total: usize,
    pub files_failed: usize,
    pub copies_written: usize,
    pub report_path: PathBuf,
    pub results: Vec<FileResult>,
    pub tally: GlobalTally,
}

impl RunSummary {
    #[inline]
    #[must_use]
    pub fn files_processed(&self) -> usize {
        self.results.len()
    }

    #[inline]
    #[must_use]
    pub fn files_with_matches(&self) -> usize {
        self.results.iter().filter(|r| r.has_matches()).count()
    }
}
