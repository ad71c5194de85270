//! Word constraints
//!
//! A constraint is a single boolean test over a candidate word. Letter values are stored
//! lowercased at insertion time; candidates are folded once per evaluation.

use std::fmt;
use thiserror::Error;

/// A single test a candidate word has to pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Word has exactly this many characters
    LengthEquals(usize),
    /// Word starts with the (lowercased) prefix
    StartsWith(String),
    /// Word ends with the (lowercased) suffix
    EndsWith(String),
    /// Character at the 0-based position equals the letter
    LetterAt { index: usize, letter: char },
    /// Letter appears anywhere in the word
    Contains(char),
    /// Letter does not appear in the word
    NotContains(char),
}

/// Error raised when a constraint cannot be added
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Prefix {prefix} is bigger than word length({length})")]
    PrefixTooLong { prefix: String, length: usize },

    #[error("Postfix {suffix} is bigger than word length({length})")]
    SuffixTooLong { suffix: String, length: usize },

    #[error("Letter must be exactly one character, got {length} in {letter:?}")]
    InvalidLetter { letter: String, length: usize },

    #[error("Index {index} is out of range for word length({length})")]
    IndexOutOfRange { index: isize, length: usize },

    #[error("Letter position {index} requires a fixed word length")]
    LengthNotSet { index: isize },
}

/// A dictionary word paired with its case-folded form
///
/// Length is measured on the original text; every letter test uses the folded text.
/// Lowercasing can change the character count (`'İ'` folds to `"i\u{307}"`), so `LetterAt`
/// positions count characters of the folded text, not of the stored word.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    original: &'a str,
    folded: String,
}

impl<'a> Candidate<'a> {
    #[must_use]
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            folded: original.to_lowercase(),
        }
    }

    /// The word as stored in the dictionary
    #[inline]
    #[must_use]
    pub const fn original(&self) -> &'a str {
        self.original
    }

    /// The lowercased word
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl Constraint {
    /// Check whether the candidate satisfies this constraint
    #[must_use]
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        match self {
            Self::LengthEquals(length) => candidate.original.chars().count() == *length,
            Self::StartsWith(prefix) => candidate.folded.starts_with(prefix.as_str()),
            Self::EndsWith(suffix) => candidate.folded.ends_with(suffix.as_str()),
            Self::LetterAt { index, letter } => {
                candidate.folded.chars().nth(*index) == Some(*letter)
            }
            Self::Contains(letter) => candidate.folded.contains(*letter),
            Self::NotContains(letter) => !candidate.folded.contains(*letter),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthEquals(length) => write!(f, "length is {length}"),
            Self::StartsWith(prefix) => write!(f, "starts with {prefix:?}"),
            Self::EndsWith(suffix) => write!(f, "ends with {suffix:?}"),
            Self::LetterAt { index, letter } => write!(f, "letter {index} is {letter:?}"),
            Self::Contains(letter) => write!(f, "contains {letter:?}"),
            Self::NotContains(letter) => write!(f, "does not contain {letter:?}"),
        }
    }
}

/// Lowercase a single-letter argument
///
/// # Errors
/// Returns `ConstraintError::InvalidLetter` unless the lowercased text is exactly one character.
pub fn normalize_letter(letter: &str) -> Result<char, ConstraintError> {
    let folded = letter.to_lowercase();
    let mut chars = folded.chars();

    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConstraintError::InvalidLetter {
            letter: letter.to_string(),
            length: folded.chars().count(),
        }),
    }
}

/// Lowercase a group of letters, stopping at the first invalid one
///
/// # Errors
/// Returns the error for the first letter that is not exactly one character.
pub fn normalize_letters<I>(letters: I) -> Result<Vec<char>, ConstraintError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    letters
        .into_iter()
        .map(|letter| normalize_letter(letter.as_ref()))
        .collect()
}
