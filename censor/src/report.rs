// src/report.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::JobError;
use crate::models::{FileResult, GlobalTally};

const DETAIL_HEADER: &str = "File Name, File Size (bytes), Forbidden Word, Count";
const RANKING_HEADER: &str = "Top 10 Forbidden Words, Count";
const EXPORT_HEADER: &str = "File Name, Forbidden Words Found";

/// Writes the end-of-run usage report.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    report_name: String,
    top_n: usize,
}

impl ReportWriter {
    #[inline]
    #[must_use]
    pub fn new(report_name: impl Into<String>, top_n: usize) -> Self {
        Self {
            report_name: report_name.into(),
            top_n,
        }
    }

    /// Writes the report into `dir` and returns its path.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Io`] if the report file cannot be created or written.
    pub fn write(
        &self,
        dir: &Path,
        results: &[FileResult],
        tally: &GlobalTally,
    ) -> Result<PathBuf, JobError> {
        let path = dir.join(&self.report_name);
        let write = || -> io::Result<()> {
            let mut out = BufWriter::new(File::create(&path)?);
            self.render(&mut out, results, tally)?;
            out.flush()
        };
        write().map_err(|e| JobError::io("failed to write report", &path, e))?;
        Ok(path)
    }

    /// Renders one row per (file, word) pair, a blank line, then the ranking.
    ///
    /// The ranking header is fixed; only the number of rows follows `top_n`.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        results: &[FileResult],
        tally: &GlobalTally,
    ) -> io::Result<()> {
        writeln!(out, "{DETAIL_HEADER}")?;
        for result in results {
            for found in &result.matches {
                writeln!(
                    out,
                    "{}, {}, {}, {}",
                    result.file_name, result.file_size, found.word, found.count
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{RANKING_HEADER}")?;
        for entry in tally.ranked(self.top_n) {
            writeln!(out, "{}, {}", entry.word, entry.count)?;
        }
        Ok(())
    }
}

/// Saves the per-file result list, one row per processed file.
///
/// # Errors
///
/// Returns [`JobError::Config`] when there is nothing to export and
/// [`JobError::Io`] when the file cannot be written.
pub fn export_results(path: &Path, results: &[FileResult]) -> Result<(), JobError> {
    if results.is_empty() {
        return Err(JobError::Config(String::from("no results to export")));
    }

    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{EXPORT_HEADER}")?;
        for result in results {
            let words: Vec<&str> = result.matches.iter().map(|m| m.word.as_str()).collect();
            writeln!(out, "{}, \"{}\"", result.file_name, words.join(", "))?;
        }
        out.flush()
    };
    write().map_err(|e| JobError::io("failed to export results", path, e))
}
