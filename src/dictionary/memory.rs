//! In-memory dictionaries

use super::{DictionaryError, Language, WordSource};
use rustc_hash::FxHashMap;

/// Source holding caller-supplied word lists
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: FxHashMap<Language, Vec<String>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word list for a language, replacing any previous one
    #[must_use]
    pub fn with_words<I>(mut self, language: Language, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lists
            .insert(language, words.into_iter().map(Into::into).collect());
        self
    }
}

impl WordSource for MemorySource {
    fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError> {
        self.lists
            .get(&language)
            .cloned()
            .ok_or(DictionaryError::Unavailable(language))
    }
}
