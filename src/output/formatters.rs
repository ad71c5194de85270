//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = value
        .saturating_mul(width)
        .checked_div(max)
        .map_or(0, |filled| filled.min(width));

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay words out in rows of `columns`, padded to the widest word
#[must_use]
pub fn format_columns(words: &[String], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    words
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Join constraint descriptions into a single line
#[must_use]
pub fn format_constraints(constraints: &[String]) -> String {
    if constraints.is_empty() {
        "any word".to_string()
    } else {
        constraints.join(" AND ")
    }
}
