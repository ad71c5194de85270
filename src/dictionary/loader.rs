//! Dictionary file loading
//!
//! Reads `words_<tag>.txt` files from a directory, one word per line.

use super::{DictionaryError, Language, WordSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Source reading `<dir>/words_<tag>.txt` on every load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the dictionary file for a language
    #[must_use]
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.dir.join(format!("words_{}.txt", language.tag()))
    }
}

impl WordSource for DirectorySource {
    fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError> {
        let path = self.path_for(language);
        let content = fs::read_to_string(&path).map_err(|source| DictionaryError::Io {
            path: path.clone(),
            source,
        })?;

        let words = parse_words(&content);
        tracing::debug!(
            %language,
            path = %path.display(),
            words = words.len(),
            "dictionary file loaded"
        );
        Ok(words)
    }
}

/// Split dictionary text into entries
///
/// One entry per line with trailing whitespace removed. Order and duplicates are kept
/// and entries are not validated.
///
/// # Examples
/// ```
/// use word_lookup::dictionary::parse_words;
///
/// assert_eq!(parse_words("агнец\r\nадрес  \n"), vec!["агнец", "адрес"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
