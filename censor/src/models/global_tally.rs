// src/models/global_tally.rs
use std::collections::HashMap;

use super::{FileResult, WordCount};

/// Cumulative per-word counts across every file of a run.
///
/// Entries keep the order in which words first appeared in the word list;
/// ranking relies on that order to break ties.
#[derive(Debug, Clone, Default)]
pub struct GlobalTally {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl GlobalTally {
    /// Seeds the tally with a zero count for every distinct word.
    #[must_use]
    pub fn new<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Self::default();
        for word in words {
            tally.slot(word);
        }
        tally
    }

    fn slot(&mut self, word: &str) -> &mut WordCount {
        let position = match self.index.get(word) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push(WordCount::new(word, 0));
                self.index.insert(word.to_owned(), position);
                position
            }
        };
        // `position` always comes from `index`, which mirrors `entries`
        &mut self.entries[position]
    }

    /// Adds every match of `result` into the running totals.
    pub fn record(&mut self, result: &FileResult) {
        for found in &result.matches {
            let entry = self.slot(&found.word);
            entry.count = entry.count.saturating_add(found.count);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> u64 {
        self.index
            .get(word)
            .and_then(|&position| self.entries.get(position))
            .map_or(0, |entry| entry.count)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to `top` words by descending count.
    ///
    /// The sort is stable, so equal counts keep first-seen word-list order.
    #[must_use]
    pub fn ranked(&self, top: usize) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top);
        ranked
    }
}
