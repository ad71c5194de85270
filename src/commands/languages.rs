//! Dictionary overview command

use crate::dictionary::{DictionaryError, Language, WordSource};

/// Number of entries in each language's dictionary
///
/// # Errors
///
/// Returns the first `DictionaryError` raised by the source.
pub fn dictionary_sizes<S: WordSource + ?Sized>(
    source: &S,
) -> Result<Vec<(Language, usize)>, DictionaryError> {
    Language::ALL
        .into_iter()
        .map(|language| {
            source
                .load_words(language)
                .map(|words| (language, words.len()))
        })
        .collect()
}
