//! Word query command
//!
//! Builds a `Word` from command-line options and evaluates it.

use crate::core::Word;
use crate::dictionary::{Language, WordSource};
use anyhow::{Context, Result};
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a query argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryArgError {
    #[error("expected INDEX=LETTER, got '{0}'")]
    MissingSeparator(String),

    #[error("invalid letter index '{0}'")]
    InvalidIndex(String),
}

/// A letter required at a position, written `INDEX=LETTER`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPosition {
    pub index: isize,
    pub letter: String,
}

impl FromStr for LetterPosition {
    type Err = QueryArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, letter) = s
            .split_once('=')
            .ok_or_else(|| QueryArgError::MissingSeparator(s.to_string()))?;

        let index = index
            .trim()
            .parse()
            .map_err(|_| QueryArgError::InvalidIndex(index.to_string()))?;

        Ok(Self {
            index,
            letter: letter.to_string(),
        })
    }
}

/// Options for a word query
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    pub length: Option<usize>,
    pub language: Language,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub letters_at: Vec<LetterPosition>,
    pub contains: Vec<String>,
    pub excludes: Vec<String>,
    pub limit: Option<usize>,
    pub count_only: bool,
}

impl QueryConfig {
    #[must_use]
    pub fn new(length: Option<usize>, language: Language) -> Self {
        Self {
            length,
            language,
            ..Self::default()
        }
    }
}

/// What a query evaluated to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Matches(Vec<String>),
    Count(usize),
}

/// Result of running a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub language: Language,
    /// Human-readable constraints in insertion order
    pub constraints: Vec<String>,
    pub outcome: QueryOutcome,
}

/// Build the query described by `config` and evaluate it against `source`
///
/// # Errors
///
/// Returns an error if:
/// - Any constraint is invalid (prefix too long, bad letter, index out of range)
/// - The dictionary cannot be loaded
pub fn run_query<S: WordSource>(config: &QueryConfig, source: S) -> Result<QueryResult> {
    let mut word = Word::with_source(config.length, config.language, source);

    if let Some(prefix) = &config.prefix {
        word.add_prefix(prefix)?;
    }
    if let Some(suffix) = &config.suffix {
        word.add_suffix(suffix)?;
    }
    for position in &config.letters_at {
        word.add_letter_at(position.index, &position.letter)
            .with_context(|| format!("invalid letter position {}", position.index))?;
    }
    word.add_contains(&config.contains)?
        .add_not_contains(&config.excludes)?;

    let constraints = word
        .constraints()
        .iter()
        .map(ToString::to_string)
        .collect();

    let outcome = if config.count_only {
        QueryOutcome::Count(word.examples_count()?)
    } else {
        QueryOutcome::Matches(word.examples(config.limit)?)
    };

    Ok(QueryResult {
        language: config.language,
        constraints,
        outcome,
    })
}
