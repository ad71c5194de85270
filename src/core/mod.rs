//! Core word query types
//!
//! `Word` is the query builder; `Constraint` is the inspectable list of tests it applies.

mod constraint;
mod word;

pub use constraint::{Candidate, Constraint, ConstraintError, normalize_letter, normalize_letters};
pub use word::Word;
