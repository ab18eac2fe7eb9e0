// src/core/redactor.rs
use crate::core::word_list::WordList;
use crate::models::WordCount;

pub const DEFAULT_MASK_CHAR: char = '*';
pub const DEFAULT_MASK_LEN: usize = 7;

/// Masked content plus the words that were found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    pub content: String,
    pub matches: Vec<WordCount>,
}

/// Replaces forbidden words with a fixed-length mask token.
#[derive(Debug, Clone)]
pub struct Redactor {
    mask: String,
}

impl Redactor {
    #[inline]
    #[must_use]
    pub fn new(mask_char: char, mask_len: usize) -> Self {
        Self {
            mask: std::iter::repeat_n(mask_char, mask_len).collect(),
        }
    }

    /// Counts and masks every word of `words`, one word at a time.
    ///
    /// Each word is searched in the text as left by the words before it, so a
    /// word that only occurs inside an earlier match is no longer found.
    /// Occurrences are literal and non-overlapping.
    #[must_use]
    pub fn redact(&self, content: &str, words: &WordList) -> Redaction {
        let mut content = content.to_owned();
        let mut matches = Vec::new();

        for word in words.iter() {
            // an empty needle would match between every character
            if word.is_empty() {
                continue;
            }

            let count = content.matches(word).count();
            if count == 0 {
                continue;
            }

            content = content.replace(word, &self.mask);
            matches.push(WordCount::new(
                word,
                u64::try_from(count).unwrap_or(u64::MAX),
            ));
        }

        Redaction { content, matches }
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(DEFAULT_MASK_CHAR, DEFAULT_MASK_LEN)
    }
}
