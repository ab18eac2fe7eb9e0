// src/core/scanner.rs
use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::JobError;

pub const DEFAULT_FILE_PATTERN: &str = "*.txt";

const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Lists the files of a single directory whose names match a glob.
#[derive(Debug, Clone)]
pub struct FileScanner {
    pattern: Pattern,
    skip_prefix: Option<String>,
}

impl FileScanner {
    /// # Errors
    ///
    /// Returns [`JobError::Config`] if `pattern` is not a valid glob.
    #[inline]
    pub fn new(pattern: &str) -> Result<Self, JobError> {
        let pattern = Pattern::new(pattern)
            .map_err(|e| JobError::Config(format!("invalid file pattern '{pattern}': {e}")))?;
        Ok(Self {
            pattern,
            skip_prefix: None,
        })
    }

    /// Ignores files whose name starts with `prefix`, e.g. copies written by an earlier run.
    #[inline]
    #[must_use]
    pub fn skipping_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.skip_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Returns the matching files directly inside `dir`.
    ///
    /// Subdirectories are not descended into. Symlinks are listed by name and
    /// kept unless they resolve to a directory, so a dangling link surfaces
    /// later as a read error on that one file. Entries that cannot be
    /// inspected are logged and skipped. The order is whatever the directory
    /// listing yields; callers must not assume it is sorted.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Io`] if `dir` does not exist, is not a directory,
    /// or cannot be listed.
    pub fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, JobError> {
        let metadata =
            fs::metadata(dir).map_err(|e| JobError::io("failed to open directory", dir, e))?;
        if !metadata.is_dir() {
            return Err(JobError::io(
                "failed to open directory",
                dir,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(JobError::io("failed to list", dir, io::Error::from(err)));
                }
                Err(err) => {
                    tracing::warn!(directory = %dir.display(), error = %err, "Skipping entry");
                    continue;
                }
            };
            if !self.accepts(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let file_type = entry.file_type();
            let keep = file_type.is_file()
                || (file_type.is_symlink()
                    && !fs::metadata(entry.path()).is_ok_and(|target| target.is_dir()));
            if keep {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn accepts(&self, name: &str) -> bool {
        if self
            .skip_prefix
            .as_deref()
            .is_some_and(|prefix| name.starts_with(prefix))
        {
            return false;
        }
        self.pattern.matches_with(name, NAME_MATCH)
    }
}
