// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::redactor::{DEFAULT_MASK_CHAR, DEFAULT_MASK_LEN};
use crate::core::scanner::DEFAULT_FILE_PATTERN;
use crate::error::JobError;

pub const CONFIG_FILE_NAME: &str = "censor.toml";

/// Tunables for a redaction run. Every key is optional in `censor.toml`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob selecting the files to redact
    pub file_pattern: String,
    /// Prefix prepended to the name of each redacted copy
    pub copy_prefix: String,
    pub mask_char: char,
    pub mask_len: usize,
    /// Name of the report written into the scanned directory
    pub report_name: String,
    /// Number of words in the report ranking
    pub top_n: usize,
    /// Pause between two files, in milliseconds
    pub throttle_ms: u64,
    /// Skip files that already carry `copy_prefix`
    pub skip_generated: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_pattern: DEFAULT_FILE_PATTERN.to_owned(),
            copy_prefix: String::from("Copy_"),
            mask_char: DEFAULT_MASK_CHAR,
            mask_len: DEFAULT_MASK_LEN,
            report_name: String::from("Report.csv"),
            top_n: 10,
            throttle_ms: 100,
            skip_generated: true,
        }
    }
}

impl Config {
    /// Parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or contains unknown or mistyped keys.
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Uses `explicit` when given, otherwise the nearest `censor.toml` at or
    /// above `dir`, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Fails if the selected file cannot be loaded.
    #[inline]
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match find_config_file(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using discovered config file");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Rejects settings that would make a run destructive or meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Config`] naming the offending key.
    pub fn validate(&self) -> Result<(), JobError> {
        if self.copy_prefix.is_empty() {
            return Err(JobError::Config(String::from(
                "copy_prefix must not be empty, copies would overwrite the originals",
            )));
        }
        if self.report_name.is_empty() {
            return Err(JobError::Config(String::from(
                "report_name must not be empty",
            )));
        }
        if self.mask_len == 0 {
            return Err(JobError::Config(String::from(
                "mask_len must be greater than 0",
            )));
        }
        Ok(())
    }
}

/// Walks from `dir` up through its ancestors and returns the first config file found.
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}
