//! Embedded dictionaries
//!
//! Word lists compiled into the binary at build time. The shipped lists are short
//! samples; use `DirectorySource` for complete dictionaries.

use super::{DictionaryError, Language, WordSource};

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words_ru.rs"));
include!(concat!(env!("OUT_DIR"), "/words_en.rs"));

/// Source backed by the dictionaries compiled into the binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Borrow the embedded list for a language
    #[must_use]
    pub const fn words(language: Language) -> &'static [&'static str] {
        match language {
            Language::Ru => WORDS_RU,
            Language::En => WORDS_EN,
        }
    }
}

impl WordSource for EmbeddedSource {
    fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError> {
        let words: Vec<String> = Self::words(language)
            .iter()
            .map(|&word| word.to_string())
            .collect();

        tracing::debug!(%language, words = words.len(), "embedded dictionary loaded");
        Ok(words)
    }
}
