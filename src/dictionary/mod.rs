//! Dictionaries for word lookup
//!
//! A dictionary is the ordered list of candidate words for one language, kept exactly as
//! stored: original casing, original order, duplicates included. Sources hand out whole
//! dictionaries; callers decide when and how often to ask.

mod embedded;
pub mod loader;
mod memory;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub use embedded::{EmbeddedSource, WORDS_EN, WORDS_EN_COUNT, WORDS_RU, WORDS_RU_COUNT};
pub use loader::{DirectorySource, parse_words};
pub use memory::MemorySource;

/// Dictionary language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 2] = [Self::Ru, Self::En];

    /// Short tag used in file names and on the command line
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| DictionaryError::UnknownLanguage(s.to_string()))
    }
}

/// Error raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no dictionary available for language '{0}'")]
    Unavailable(Language),

    #[error("unknown language tag '{0}'")]
    UnknownLanguage(String),
}

/// Something that can supply a full dictionary per language
pub trait WordSource {
    /// Load every word for `language`, in stored order
    ///
    /// # Errors
    /// Returns `DictionaryError` if the dictionary is missing or unreadable.
    fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError>;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError> {
        (**self).load_words(language)
    }
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError> {
        (**self).load_words(language)
    }
}
