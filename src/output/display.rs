//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, format_constraints};
use crate::commands::{QueryOutcome, QueryResult};
use crate::dictionary::Language;
use crate::statistic::Statistic;
use colored::Colorize;

/// Print the result of a word query
pub fn print_query_result(result: &QueryResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Dictionary: {}   Query: {}",
        result.language.tag().to_uppercase().bright_yellow().bold(),
        format_constraints(&result.constraints)
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        QueryOutcome::Count(count) => {
            println!(
                "\n{} matching words",
                count.to_string().bright_yellow().bold()
            );
        }
        QueryOutcome::Matches(words) if words.is_empty() => {
            println!("\n{}", "No matching words".red().bold());
        }
        QueryOutcome::Matches(words) => {
            println!();
            for row in format_columns(words, 6) {
                println!("  {row}");
            }
            let shown = format!("{} words shown", words.len());
            println!("\n{}", shown.green().bold());
        }
    }
}

/// Print a frequency report
pub fn print_statistic(statistic: &Statistic, top: usize, occurrences: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TEXT STATISTIC".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:          {}", statistic.words_count());
    println!("   Unique words:   {}", statistic.unique_words_count());

    let most_common = statistic.most_common(Some(top));
    let max = most_common.first().map_or(0, |&(_, count)| count);

    println!("\n📈 {}", "Most common:".bright_cyan().bold());
    for (word, count) in &most_common {
        println!(
            "   {:<16} {} {count}",
            word,
            create_progress_bar(*count, max, 30).green()
        );
    }

    println!("\n📉 {}", "Least common:".bright_cyan().bold());
    for (word, count) in statistic.less_common(Some(top)) {
        println!("   {word:<16} {count}");
    }

    if let Some(occurrences) = occurrences {
        let words = statistic.words_with_count(occurrences);
        let heading = format!("Words seen exactly {occurrences} times:");
        println!("\n🔎 {} {}", heading.bright_cyan().bold(), words.len());
        if !words.is_empty() {
            println!("   {}", words.join(", "));
        }
    }
}

/// Print the size of every dictionary
pub fn print_languages(sizes: &[(Language, usize)]) {
    println!("\n{}", "Dictionaries:".bright_cyan().bold());
    for (language, size) in sizes {
        println!(
            "   {}  {} words",
            language.tag().bright_yellow().bold(),
            size
        );
    }
}
