// src/job/engine.rs
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use crate::config::Config;
use crate::core::redactor::Redactor;
use crate::core::scanner::FileScanner;
use crate::core::word_list::WordList;
use crate::error::JobError;
use crate::job::control::{Checkpoint, RunControl};
use crate::job::events::JobEvent;
use crate::models::{FileResult, GlobalTally, RunSummary};
use crate::report::ReportWriter;

/// The two inputs of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub directory: PathBuf,
    pub word_list: PathBuf,
}

impl RunRequest {
    #[inline]
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, word_list: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            word_list: word_list.into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`JobError::Config`] if either path is empty.
    pub fn validate(&self) -> Result<(), JobError> {
        if self.word_list.as_os_str().is_empty() {
            return Err(JobError::Config(String::from("word list path is empty")));
        }
        if self.directory.as_os_str().is_empty() {
            return Err(JobError::Config(String::from("directory path is empty")));
        }
        Ok(())
    }
}

/// How a run that did not fail came to an end.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed(RunSummary),
    Cancelled { results: Vec<FileResult> },
}

struct ProcessedFile {
    result: FileResult,
    copy: Option<PathBuf>,
}

/// Runs one redaction pass over `request.directory` on the calling thread.
///
/// Files are handled strictly in listing order. Before each file the loop
/// stops if `control` was cancelled and blocks while it is paused. A failure
/// on one file is reported as [`JobEvent::FileError`] and the loop moves on.
/// Progress is sent after every file. The report is only written when the
/// loop ran to the end.
///
/// Terminal events are not sent from here; that is the caller's job.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, the word list or directory
/// cannot be read, or the report cannot be written.
pub fn execute(
    request: &RunRequest,
    config: &Config,
    control: &RunControl,
    events: &Sender<JobEvent>,
) -> Result<RunOutcome, JobError> {
    request.validate()?;
    config.validate()?;

    let words = WordList::load(&request.word_list)?;
    let mut scanner = FileScanner::new(&config.file_pattern)?;
    if config.skip_generated {
        scanner = scanner.skipping_prefix(config.copy_prefix.as_str());
    }
    let files = scanner.list_files(&request.directory)?;
    let redactor = Redactor::new(config.mask_char, config.mask_len);

    let total = files.len();
    let mut tally = GlobalTally::new(words.iter());
    let mut results = Vec::with_capacity(total);
    let mut files_failed: usize = 0;
    let mut copies_written: usize = 0;

    tracing::info!(
        directory = %request.directory.display(),
        words = words.len(),
        files = total,
        "Starting redaction run"
    );

    for (index, path) in files.iter().enumerate() {
        if control.checkpoint() == Checkpoint::Cancel {
            tracing::info!(processed = results.len(), total, "Run cancelled");
            return Ok(RunOutcome::Cancelled { results });
        }

        match process_file(path, &words, &redactor, &config.copy_prefix) {
            Ok(processed) => {
                if let Some(copy) = &processed.copy {
                    copies_written = copies_written.saturating_add(1);
                    tracing::debug!(copy = %copy.display(), "Wrote redacted copy");
                }
                tally.record(&processed.result);
                results.push(processed.result);
            }
            Err(err) => {
                files_failed = files_failed.saturating_add(1);
                tracing::warn!(file = %path.display(), error = %err, "Skipping file");
                let _ = events.send(JobEvent::FileError {
                    file_name: display_name(path),
                    message: err.to_string(),
                });
            }
        }

        let current = index.saturating_add(1);
        let _ = events.send(JobEvent::Progress { current, total });
        if current < total {
            control.pace(config.throttle());
        }
    }

    let report_path = ReportWriter::new(config.report_name.as_str(), config.top_n).write(
        &request.directory,
        &results,
        &tally,
    )?;
    tracing::info!(
        report = %report_path.display(),
        processed = results.len(),
        failed = files_failed,
        copies = copies_written,
        "Run completed"
    );

    Ok(RunOutcome::Completed(RunSummary {
        files_total: total,
        files_failed,
        copies_written,
        report_path,
        results,
        tally,
    }))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// `{prefix}{name}` next to the original, keeping the name's raw bytes.
fn copy_path(path: &Path, copy_prefix: &str) -> PathBuf {
    let mut name = OsString::from(copy_prefix);
    name.push(path.file_name().unwrap_or(path.as_os_str()));
    path.with_file_name(name)
}

fn process_file(
    path: &Path,
    words: &WordList,
    redactor: &Redactor,
    copy_prefix: &str,
) -> Result<ProcessedFile, JobError> {
    let bytes = fs::read(path).map_err(|e| JobError::io("failed to read", path, e))?;
    let file_size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    // undecodable bytes become U+FFFD and the file is still redacted
    let content = String::from_utf8_lossy(&bytes);

    let redaction = redactor.redact(&content, words);
    let copy = if redaction.matches.is_empty() {
        None
    } else {
        let copy_path = copy_path(path, copy_prefix);
        fs::write(&copy_path, &redaction.content)
            .map_err(|e| JobError::io("failed to write", &copy_path, e))?;
        Some(copy_path)
    };

    Ok(ProcessedFile {
        result: FileResult {
            file_name: display_name(path),
            file_size,
            matches: redaction.matches,
        },
        copy,
    })
}
