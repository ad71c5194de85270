//! Constraint-based word query
//!
//! A `Word` collects what is known about an unknown word (its length, letters at
//! given positions, prefix, suffix, letters it does or does not contain) and looks up
//! every dictionary entry that satisfies all of it.

use super::constraint::{
    Candidate, Constraint, ConstraintError, normalize_letter, normalize_letters,
};
use crate::dictionary::{DictionaryError, EmbeddedSource, Language, WordSource};

/// Dictionary cache state of a query
#[derive(Debug, Clone, Default)]
enum Cache {
    #[default]
    Unloaded,
    Loaded(Vec<String>),
}

impl Cache {
    fn words(&self) -> &[String] {
        match self {
            Self::Loaded(words) => words,
            Self::Unloaded => &[],
        }
    }
}

/// Query builder over a single-language dictionary
///
/// Constraints are only ever appended. The dictionary is read from the source on the
/// first evaluation and reused for the lifetime of the query.
///
/// # Examples
/// ```
/// use word_lookup::core::Word;
/// use word_lookup::dictionary::{Language, MemorySource};
///
/// let source = MemorySource::new().with_words(Language::Ru, ["агент", "агнец", "адрес"]);
/// let mut word = Word::with_source(Some(5), Language::Ru, source);
/// word.add_prefix("АГ")?.add_suffix("ец")?;
///
/// assert_eq!(word.examples(None)?, vec!["агнец"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Word<S = EmbeddedSource> {
    length: Option<usize>,
    language: Language,
    source: S,
    cache: Cache,
    constraints: Vec<Constraint>,
}

impl Word {
    /// Create a query over the embedded dictionaries
    ///
    /// `None` or `Some(0)` leaves the word length unconstrained.
    #[must_use]
    pub fn new(length: Option<usize>, language: Language) -> Self {
        Self::with_source(length, language, EmbeddedSource)
    }
}

impl<S> Word<S> {
    /// Create a query that loads its dictionary from `source`
    #[must_use]
    pub fn with_source(length: Option<usize>, language: Language, source: S) -> Self {
        let length = length.filter(|&n| n > 0);
        let constraints = length.map(Constraint::LengthEquals).into_iter().collect();

        Self {
            length,
            language,
            source,
            cache: Cache::Unloaded,
            constraints,
        }
    }

    /// Target word length, `None` when unconstrained
    #[inline]
    #[must_use]
    pub const fn length(&self) -> Option<usize> {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Constraints in insertion order
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether the dictionary has been read into the cache
    #[inline]
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.cache, Cache::Loaded(_))
    }

    /// Require the word to start with `prefix` (case-insensitive)
    ///
    /// An empty prefix adds nothing.
    ///
    /// # Errors
    /// Returns `ConstraintError::PrefixTooLong` if the length is fixed and the prefix is longer.
    pub fn add_prefix(&mut self, prefix: &str) -> Result<&mut Self, ConstraintError> {
        if let Some(length) = self.length
            && prefix.chars().count() > length
        {
            return Err(ConstraintError::PrefixTooLong {
                prefix: prefix.to_string(),
                length,
            });
        }

        if !prefix.is_empty() {
            self.push(Constraint::StartsWith(prefix.to_lowercase()));
        }
        Ok(self)
    }

    /// Require the word to end with `suffix` (case-insensitive)
    ///
    /// An empty suffix adds nothing.
    ///
    /// # Errors
    /// Returns `ConstraintError::SuffixTooLong` if the length is fixed and the suffix is longer.
    pub fn add_suffix(&mut self, suffix: &str) -> Result<&mut Self, ConstraintError> {
        if let Some(length) = self.length
            && suffix.chars().count() > length
        {
            return Err(ConstraintError::SuffixTooLong {
                suffix: suffix.to_string(),
                length,
            });
        }

        if !suffix.is_empty() {
            self.push(Constraint::EndsWith(suffix.to_lowercase()));
        }
        Ok(self)
    }

    /// Require `letter` at the 0-based `index`
    ///
    /// # Errors
    /// Returns `ConstraintError` if:
    /// - The word length is unconstrained
    /// - `index` is outside `0..length`
    /// - `letter` is not exactly one character
    pub fn add_letter_at(
        &mut self,
        index: isize,
        letter: &str,
    ) -> Result<&mut Self, ConstraintError> {
        let length = self.length.ok_or(ConstraintError::LengthNotSet { index })?;

        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position < length)
            .ok_or(ConstraintError::IndexOutOfRange { index, length })?;

        let letter = normalize_letter(letter)?;
        self.push(Constraint::LetterAt {
            index: position,
            letter,
        });
        Ok(self)
    }

    /// Require every letter to appear somewhere in the word
    ///
    /// Nothing is added unless all letters are valid. No letters is a no-op.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidLetter` for the first letter that is not exactly
    /// one character.
    pub fn add_contains<I>(&mut self, letters: I) -> Result<&mut Self, ConstraintError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for letter in normalize_letters(letters)? {
            self.push(Constraint::Contains(letter));
        }
        Ok(self)
    }

    /// Require none of the letters to appear in the word
    ///
    /// Nothing is added unless all letters are valid. No letters is a no-op.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidLetter` for the first letter that is not exactly
    /// one character.
    pub fn add_not_contains<I>(&mut self, letters: I) -> Result<&mut Self, ConstraintError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for letter in normalize_letters(letters)? {
            self.push(Constraint::NotContains(letter));
        }
        Ok(self)
    }

    /// Check a single word against every constraint
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let candidate = Candidate::new(word);
        self.constraints
            .iter()
            .all(|constraint| constraint.matches(&candidate))
    }

    fn push(&mut self, constraint: Constraint) {
        tracing::trace!(%constraint, "constraint added");
        self.constraints.push(constraint);
    }
}

impl<S: WordSource> Word<S> {
    /// Matching dictionary words in dictionary order
    ///
    /// `None` or `Some(0)` returns every match; `Some(n)` returns the first `n`.
    /// Words keep their dictionary casing.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the dictionary cannot be loaded. The query stays
    /// unloaded and the next call tries again.
    pub fn examples(&mut self, limit: Option<usize>) -> Result<Vec<String>, DictionaryError> {
        self.ensure_loaded()?;

        let limit = limit.filter(|&n| n > 0).unwrap_or(usize::MAX);
        let examples: Vec<String> = self
            .cache
            .words()
            .iter()
            .filter(|word| self.matches(word))
            .take(limit)
            .cloned()
            .collect();

        tracing::debug!(
            language = %self.language,
            matched = examples.len(),
            "examples evaluated"
        );
        Ok(examples)
    }

    /// Number of dictionary words satisfying every constraint
    ///
    /// # Errors
    /// Returns `DictionaryError` if the dictionary cannot be loaded.
    pub fn examples_count(&mut self) -> Result<usize, DictionaryError> {
        self.ensure_loaded()?;

        Ok(self
            .cache
            .words()
            .iter()
            .filter(|word| self.matches(word))
            .count())
    }

    fn ensure_loaded(&mut self) -> Result<(), DictionaryError> {
        if matches!(self.cache, Cache::Unloaded) {
            let words = self.source.load_words(self.language)?;
            tracing::debug!(
                language = %self.language,
                words = words.len(),
                "dictionary cached"
            );
            self.cache = Cache::Loaded(words);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemorySource;
    use std::cell::Cell;

    const DATA: &[&str] = &[
        "ёкать", "ёмкий", "ёрник", "аббат", "абзац", "аборт", "абрек", "абрис", "авизо", "аврал",
        "автол", "агент", "агнец", "адепт", "адрес",
    ];

    fn data_source() -> MemorySource {
        MemorySource::new().with_words(Language::Ru, DATA.to_vec())
    }

    fn setup_word(length: usize) -> Word<MemorySource> {
        Word::with_source(Some(length), Language::Ru, data_source())
    }

    /// Source that counts loads and can be told to fail
    struct CountingSource {
        loads: Cell<usize>,
        failures_left: Cell<usize>,
    }

    impl CountingSource {
        fn new(failures: usize) -> Self {
            Self {
                loads: Cell::new(0),
                failures_left: Cell::new(failures),
            }
        }
    }

    impl WordSource for CountingSource {
        fn load_words(&self, language: Language) -> Result<Vec<String>, DictionaryError> {
            self.loads.set(self.loads.get() + 1);
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(DictionaryError::Unavailable(language));
            }
            Ok(DATA.iter().map(|w| (*w).to_string()).collect())
        }
    }

    #[test]
    fn simple_object() {
        let word = Word::new(Some(10), Language::Ru);
        assert!(!word.is_loaded());
        assert_eq!(word.length(), Some(10));
        assert_eq!(word.language(), Language::Ru);
        assert_eq!(word.constraints(), &[Constraint::LengthEquals(10)]);
    }

    #[test]
    fn en_dictionary() {
        let word = Word::new(Some(10), Language::En);
        assert!(!word.is_loaded());
        assert_eq!(word.language(), Language::En);
    }

    #[test]
    fn unconstrained_length_adds_no_length_constraint() {
        let word = Word::new(None, Language::Ru);
        assert_eq!(word.length(), None);
        assert!(word.constraints().is_empty());

        let word = Word::new(Some(0), Language::Ru);
        assert_eq!(word.length(), None);
        assert!(word.constraints().is_empty());
    }

    #[test]
    fn limit() {
        let params: Vec<(Vec<&str>, Option<usize>)> = vec![
            (DATA.to_vec(), None),
            (DATA.to_vec(), Some(0)),
            (vec!["ёкать"], Some(1)),
            (vec!["ёкать", "ёмкий", "ёрник"], Some(3)),
            (DATA.to_vec(), Some(15)),
            (DATA.to_vec(), Some(100)),
        ];

        for (expected, limit) in params {
            let mut word = setup_word(5);
            let result = word.examples(limit).unwrap();
            assert_eq!(result, expected, "limit {limit:?}");
        }
    }

    #[test]
    fn limit_truncates_to_min_of_matches() {
        let mut word = setup_word(5);
        let all = word.examples(None).unwrap();

        for limit in 1..=20 {
            let limited = word.examples(Some(limit)).unwrap();
            assert_eq!(limited.len(), all.len().min(limit));
            assert_eq!(limited[..], all[..limited.len()]);
        }
    }

    #[test]
    fn starts_with_raises_when_bigger_than_length() {
        let mut word = setup_word(1);
        let err = word.add_prefix("22").unwrap_err();
        assert_eq!(err.to_string(), "Prefix 22 is bigger than word length(1)");
        assert_eq!(word.constraints().len(), 1);
    }

    #[test]
    fn starts_with_does_nothing_when_empty() {
        let mut word = setup_word(1);
        let before = word.constraints().to_vec();
        word.add_prefix("").unwrap();
        assert_eq!(word.constraints(), &before[..]);
    }

    #[test]
    fn starts_with_appends_to_constraints() {
        let mut word = setup_word(12);
        let before = word.constraints().len();
        word.add_prefix("12").unwrap();
        assert_eq!(word.constraints().len(), before + 1);
    }

    #[test]
    fn ends_with_raises_when_bigger_than_length() {
        let mut word = setup_word(1);
        let err = word.add_suffix("22").unwrap_err();
        assert_eq!(err.to_string(), "Postfix 22 is bigger than word length(1)");
        assert_eq!(word.constraints().len(), 1);
    }

    #[test]
    fn ends_with_does_nothing_when_empty() {
        let mut word = setup_word(1);
        let before = word.constraints().to_vec();
        word.add_suffix("").unwrap();
        assert_eq!(word.constraints(), &before[..]);
    }

    #[test]
    fn ends_with_appends_to_constraints() {
        let mut word = setup_word(12);
        let before = word.constraints().len();
        word.add_suffix("12").unwrap();
        assert_eq!(word.constraints().len(), before + 1);
    }

    #[test]
    fn prefix_length_unchecked_without_length() {
        let mut word = Word::with_source(None, Language::Ru, data_source());

        word.add_prefix("очень-длинная-приставка").unwrap();
        word.add_suffix("очень-длинный-суффикс").unwrap();
        assert_eq!(word.constraints().len(), 2);
        assert_eq!(word.examples_count().unwrap(), 0);
    }

    #[test]
    fn starts_with_works() {
        let params: Vec<(Vec<&str>, &str)> = vec![
            (vec!["агент", "агнец"], "АГ"),
            (vec!["агент", "агнец"], "аг"),
            (vec![], "W"),
            (vec!["ёмкий"], "ёмкий"),
            (vec!["ёмкий"], "ёмки"),
            (vec!["ёмкий"], "ёмк"),
            (vec!["ёмкий"], "ём"),
            (vec!["ёкать", "ёмкий", "ёрник"], "ё"),
        ];

        for (expected, prefix) in params {
            let mut word = setup_word(5);
            word.add_prefix(prefix).unwrap();
            let result = word.examples(Some(5)).unwrap();
            assert_eq!(result, expected, "prefix {prefix}");
        }
    }

    #[test]
    fn ends_with_works() {
        let params: Vec<(Vec<&str>, &str)> = vec![
            (vec!["аврал", "автол"], "л"),
            (vec!["аврал", "автол"], "Л"),
            (vec!["агнец"], "агнец"),
            (vec!["агнец"], "гнец"),
            (vec!["агнец"], "нец"),
            (vec!["агнец"], "ец"),
            (vec!["абзац", "агнец"], "ц"),
        ];

        for (expected, suffix) in params {
            let mut word = setup_word(5);
            word.add_suffix(suffix).unwrap();
            let result = word.examples(Some(5)).unwrap();
            assert_eq!(result, expected, "suffix {suffix}");
        }
    }

    #[test]
    fn ends_and_starts_with_works() {
        let mut word = setup_word(5);
        word.add_prefix("АГ").unwrap().add_suffix("ец").unwrap();
        assert_eq!(word.examples(Some(5)).unwrap(), vec!["агнец"]);
    }

    #[test]
    fn prefix_then_suffix_can_exclude_everything() {
        let mut word = setup_word(5);
        word.add_prefix("ё").unwrap();
        assert_eq!(
            word.examples(Some(5)).unwrap(),
            vec!["ёкать", "ёмкий", "ёрник"]
        );

        word.add_suffix("ец").unwrap();
        assert!(word.examples(Some(5)).unwrap().is_empty());
    }

    #[test]
    fn conjunction_of_prefix_suffix_and_letter() {
        let mut word = setup_word(5);
        word.add_prefix("аг")
            .unwrap()
            .add_suffix("ец")
            .unwrap()
            .add_letter_at(2, "н")
            .unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["агнец"]);
        assert_eq!(word.examples_count().unwrap(), 1);
    }

    #[test]
    fn letter_at_works() {
        let mut word = setup_word(5);
        word.add_letter_at(1, "Б").unwrap();
        assert_eq!(
            word.examples(None).unwrap(),
            vec!["аббат", "абзац", "аборт", "абрек", "абрис"]
        );

        word.add_letter_at(4, "с").unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["абрис"]);
    }

    #[test]
    fn letter_at_boundaries() {
        let mut word = setup_word(5);
        assert!(word.add_letter_at(0, "а").is_ok());
        assert!(word.add_letter_at(4, "т").is_ok());

        assert_eq!(
            word.add_letter_at(-1, "а").unwrap_err(),
            ConstraintError::IndexOutOfRange {
                index: -1,
                length: 5
            }
        );
        assert_eq!(
            word.add_letter_at(5, "а").unwrap_err(),
            ConstraintError::IndexOutOfRange {
                index: 5,
                length: 5
            }
        );
        assert_eq!(word.constraints().len(), 3);
        assert_eq!(
            word.examples(None).unwrap(),
            vec!["аббат", "аборт", "агент", "адепт"]
        );
    }

    #[test]
    fn letter_at_rejects_wrong_letter_length() {
        let mut word = setup_word(5);
        let before = word.constraints().len();

        for (letter, length) in [("", 0), ("аб", 2), ("абв", 3)] {
            assert_eq!(
                word.add_letter_at(0, letter).unwrap_err(),
                ConstraintError::InvalidLetter {
                    letter: letter.to_string(),
                    length
                }
            );
        }
        assert_eq!(word.constraints().len(), before);
    }

    #[test]
    fn letter_at_requires_length() {
        let mut word = Word::new(None, Language::Ru);
        assert_eq!(
            word.add_letter_at(0, "а").unwrap_err(),
            ConstraintError::LengthNotSet { index: 0 }
        );
        assert!(word.constraints().is_empty());
    }

    #[test]
    fn contains_works() {
        let mut word = setup_word(5);
        word.add_contains(["З", "ц"]).unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["абзац"]);
    }

    #[test]
    fn not_contains_works() {
        let mut word = setup_word(5);
        word.add_not_contains(["а", "е", "и", "о"]).unwrap();
        assert!(word.examples(None).unwrap().is_empty());

        let mut word = setup_word(5);
        word.add_not_contains(["а"]).unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["ёмкий", "ёрник"]);
    }

    #[test]
    fn contains_with_no_letters_is_noop() {
        let mut word = setup_word(5);
        word.add_contains(Vec::<&str>::new())
            .unwrap()
            .add_not_contains(Vec::<String>::new())
            .unwrap();
        assert_eq!(word.constraints().len(), 1);
    }

    #[test]
    fn contains_is_all_or_nothing() {
        let mut word = setup_word(5);
        let err = word.add_contains(["а", "бв", ""]).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::InvalidLetter {
                letter: "бв".to_string(),
                length: 2
            }
        );
        assert_eq!(word.constraints().len(), 1);

        let err = word.add_not_contains([""]).unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::InvalidLetter { length: 0, .. }
        ));
        assert_eq!(word.constraints().len(), 1);
    }

    #[test]
    fn constraints_keep_insertion_order() {
        let mut word = setup_word(5);
        word.add_suffix("ЕЦ")
            .unwrap()
            .add_contains(["Н"])
            .unwrap()
            .add_prefix("аг")
            .unwrap();

        assert_eq!(
            word.constraints(),
            &[
                Constraint::LengthEquals(5),
                Constraint::EndsWith("ец".to_string()),
                Constraint::Contains('н'),
                Constraint::StartsWith("аг".to_string()),
            ]
        );
    }

    #[test]
    fn matching_preserves_dictionary_case() {
        let words = ["April", "apple", "ADEPT", "Earth"];
        let source = MemorySource::new().with_words(Language::En, words);
        let mut word = Word::with_source(Some(5), Language::En, source);
        word.add_prefix("a").unwrap();
        assert_eq!(
            word.examples(None).unwrap(),
            vec!["April", "apple", "ADEPT"]
        );

        word.add_letter_at(1, "P").unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["April", "apple"]);
        assert!(word.matches("APRON"));
        assert!(!word.matches("adept"));
    }

    #[test]
    fn letter_positions_follow_lowercased_text() {
        // "İzmir" lowercases to six characters, so its 'z' sits at index 2
        let words = ["İzmir", "Izmir"];
        let source = MemorySource::new().with_words(Language::En, words);
        let mut word = Word::with_source(Some(5), Language::En, source);
        assert_eq!(word.examples_count().unwrap(), 2);

        word.add_letter_at(1, "Z").unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["Izmir"]);
    }

    #[test]
    fn unconstrained_length_matches_any_length() {
        let words = ["ёж", "ёлка", "ёкать", "ёршик"];
        let source = MemorySource::new().with_words(Language::Ru, words);
        let mut word = Word::with_source(None, Language::Ru, source);
        word.add_prefix("ё").unwrap();
        assert_eq!(word.examples_count().unwrap(), 4);
    }

    #[test]
    fn examples_count_ignores_limit() {
        let mut word = setup_word(5);
        word.add_prefix("а").unwrap();
        assert_eq!(word.examples(Some(2)).unwrap().len(), 2);
        assert_eq!(word.examples_count().unwrap(), 12);
        assert_eq!(
            word.examples_count().unwrap(),
            word.examples(None).unwrap().len()
        );
    }

    #[test]
    fn dictionary_loaded_once() {
        let mut word = Word::with_source(Some(5), Language::Ru, CountingSource::new(0));
        assert!(!word.is_loaded());

        let first = word.examples(None).unwrap();
        let second = word.examples(None).unwrap();
        let count = word.examples_count().unwrap();

        assert!(word.is_loaded());
        assert_eq!(first, second);
        assert_eq!(count, DATA.len());
        assert_eq!(word.source().loads.get(), 1);
    }

    #[test]
    fn constraints_can_be_added_after_loading() {
        let mut word = Word::with_source(Some(5), Language::Ru, CountingSource::new(0));
        assert_eq!(word.examples_count().unwrap(), DATA.len());

        word.add_prefix("аб").unwrap();
        assert_eq!(word.examples_count().unwrap(), 5);
        assert_eq!(word.source().loads.get(), 1);
    }

    #[test]
    fn failed_load_stays_unloaded_and_retries() {
        let mut word = Word::with_source(Some(5), Language::Ru, CountingSource::new(1));

        let err = word.examples(None).unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable(Language::Ru)));
        assert!(!word.is_loaded());

        assert_eq!(word.examples_count().unwrap(), DATA.len());
        assert!(word.is_loaded());
        assert_eq!(word.source().loads.get(), 2);
    }

    #[test]
    fn missing_language_is_an_error() {
        let mut word = Word::with_source(Some(5), Language::En, data_source());
        assert!(matches!(
            word.examples_count(),
            Err(DictionaryError::Unavailable(Language::En))
        ));
    }

    #[test]
    fn loaded_but_empty_dictionary() {
        let no_words: Vec<String> = Vec::new();
        let source = MemorySource::new().with_words(Language::Ru, no_words);
        let mut word = Word::with_source(None, Language::Ru, source);
        assert!(word.examples(None).unwrap().is_empty());
        assert!(word.is_loaded());
    }

    #[test]
    fn embedded_dictionary_lookup() {
        let mut word = Word::new(Some(5), Language::Ru);
        word.add_prefix("аг").unwrap().add_suffix("ец").unwrap();
        assert_eq!(word.examples(None).unwrap(), vec!["агнец"]);
    }
}
