//! Word Lookup
//!
//! Constraint-based dictionary search for word games and puzzles: fix a word length,
//! add what you know about the letters, and list every dictionary word that fits.
//!
//! # Quick Start
//!
//! ```rust
//! use word_lookup::core::Word;
//! use word_lookup::dictionary::Language;
//!
//! let mut word = Word::new(Some(5), Language::Ru);
//! word.add_prefix("аг")?
//!     .add_suffix("ец")?
//!     .add_letter_at(2, "н")?;
//!
//! assert_eq!(word.examples(None)?, vec!["агнец"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Dictionaries
//!
//! The lists embedded from `data/` are small samples, a few dozen words per language,
//! enough for the examples and tests above. For real lookups point a
//! [`dictionary::DirectorySource`] (`--dictionary <dir>` on the command line) at a
//! directory of full `words_<lang>.txt` lists, one word per line.

// Core query types
pub mod core;

// Word sources
pub mod dictionary;

// Text frequency statistics
pub mod statistic;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
