// src/models/file_result.rs

/// A forbidden word together with how often it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Outcome of processing a single file.
///
/// `matches` only holds words that were actually found, in word-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file_name: String,
    pub file_size: u64,
    pub matches: Vec<WordCount>,
}

impl FileResult {
    #[inline]
    #[must_use]
    pub const fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn count_for(&self, word: &str) -> u64 {
        self.matches
            .iter()
            .find(|m| m.word == word)
            .map_or(0, |m| m.count)
    }

    #[inline]
    #[must_use]
    pub fn total_matches(&self) -> u64 {
        self.matches
            .iter()
            .fold(0_u64, |acc, m| acc.saturating_add(m.count))
    }
}
