// src/core/word_list.rs
use std::fs;
use std::path::Path;

use crate::error::JobError;

/// Ordered list of forbidden words, exactly as they appear in the source file.
///
/// Lines are neither trimmed nor deduplicated. Empty lines stay in the list
/// but the redactor never matches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Reads one forbidden word per line from `path`.
    ///
    /// Bytes that are not valid UTF-8 are decoded as U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Io`] if the file cannot be read.
    #[inline]
    pub fn load(path: &Path) -> Result<Self, JobError> {
        let bytes = fs::read(path).map_err(|e| JobError::io("failed to read word list", path, e))?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    #[inline]
    #[must_use]
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
