//! Word frequency statistics
//!
//! Tokenizes free text and answers frequency questions about it: most and least common
//! words, and words with an exact number of occurrences. Counting is case-insensitive.

mod tokenize;

use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::fmt;

pub use tokenize::tokenize;

/// Frequency table over the words of a text
#[derive(Debug, Clone, Default)]
pub struct Statistic {
    words: Vec<String>,
    /// Lowercased words with their counts, in first-appearance order
    entries: Vec<(String, usize)>,
    index: FxHashMap<String, usize>,
}

impl Statistic {
    /// Build the frequency table for `content`
    #[must_use]
    pub fn new(content: &str) -> Self {
        let mut statistic = Self::default();

        for token in tokenize(content) {
            statistic.words.push(token.to_string());

            let folded = token.to_lowercase();
            if let Some(&position) = statistic.index.get(&folded) {
                statistic.entries[position].1 += 1;
            } else {
                let position = statistic.entries.len();
                statistic.index.insert(folded.clone(), position);
                statistic.entries.push((folded, 1));
            }
        }

        tracing::debug!(
            words = statistic.words.len(),
            unique = statistic.entries.len(),
            "text statistic built"
        );
        statistic
    }

    /// Tokens in text order, original casing
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn words_count(&self) -> usize {
        self.words.len()
    }

    /// Distinct lowercased words in first-appearance order
    pub fn unique_words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    #[inline]
    #[must_use]
    pub fn unique_words_count(&self) -> usize {
        self.entries.len()
    }

    /// Occurrences of `word`, ignoring case
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(&word.to_lowercase())
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Words by descending count; ties keep first-appearance order
    ///
    /// `None` returns every word, `Some(n)` the first `n`.
    #[must_use]
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        let mut ranked = self.ranked();
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// The full `most_common` ranking reversed
    ///
    /// `None` or `Some(0)` returns every word, `Some(n)` the first `n`.
    #[must_use]
    pub fn less_common(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        let mut ranked = self.ranked();
        ranked.reverse();
        if let Some(limit) = limit.filter(|&n| n > 0) {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Words occurring exactly `count` times, in first-appearance order
    #[must_use]
    pub fn words_with_count(&self, count: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, occurrences)| *occurrences == count)
            .map(|(word, _)| word.as_str())
            .collect()
    }

    fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        // Stable sort keeps first-appearance order among equal counts
        ranked.sort_by_key(|&(_, count)| Reverse(count));
        ranked
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text statistic:")?;
        writeln!(
            f,
            "words count={}, unique words count={},",
            self.words_count(),
            self.unique_words_count()
        )?;
        write!(
            f,
            "3 most common words={:?}, 3 less common words={:?}",
            self.most_common(Some(3)),
            self.less_common(Some(3))
        )
    }
}
