//! Text statistic command
//!
//! Reads a text file and builds its word frequency table.

use crate::statistic::Statistic;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Build a `Statistic` from the text file at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn run_stats<P: AsRef<Path>>(path: P) -> Result<Statistic> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read text file {}", path.display()))?;

    Ok(Statistic::new(&content))
}
