//! Command implementations

pub mod languages;
pub mod query;
pub mod stats;

pub use languages::dictionary_sizes;
pub use query::{LetterPosition, QueryArgError, QueryConfig, QueryOutcome, QueryResult, run_query};
pub use stats::run_stats;
