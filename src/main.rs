//! Word Lookup - CLI
//!
//! Query dictionaries by length, letters, prefix and suffix, or count word frequencies
//! in a text file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use word_lookup::{
    commands::{LetterPosition, QueryConfig, dictionary_sizes, run_query, run_stats},
    dictionary::{DirectorySource, EmbeddedSource, Language, WordSource},
    output::{print_languages, print_query_result, print_statistic},
};

#[derive(Parser)]
#[command(
    name = "word_lookup",
    about = "Find dictionary words matching length, letter, prefix and suffix constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'embedded' (default) or a directory containing words_<lang>.txt files
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find words matching constraints
    Query {
        /// Exact word length (0 or omitted: any length)
        #[arg(short = 'n', long)]
        length: Option<usize>,

        /// Dictionary language: ru or en
        #[arg(short, long, default_value = "ru")]
        language: Language,

        /// Required prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Required suffix
        #[arg(short, long)]
        suffix: Option<String>,

        /// Letter at a 0-based position, as INDEX=LETTER (repeatable)
        #[arg(short = 'a', long = "at", allow_hyphen_values = true)]
        letters_at: Vec<LetterPosition>,

        /// Letters that must appear anywhere
        #[arg(short, long, num_args = 1..)]
        contains: Vec<String>,

        /// Letters that must not appear
        #[arg(short = 'x', long, num_args = 1..)]
        excludes: Vec<String>,

        /// Show at most this many words (0: all)
        #[arg(long)]
        limit: Option<usize>,

        /// Only print the number of matches
        #[arg(long)]
        count: bool,
    },

    /// Word frequency statistics for a text file
    Stats {
        /// Text file to analyze
        file: PathBuf,

        /// Number of most/least common words to show
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Also list words seen exactly this many times
        #[arg(short, long)]
        occurrences: Option<usize>,
    },

    /// List dictionaries and their sizes
    Languages,
}

/// Pick the word source based on the -d flag
fn open_dictionary(dictionary: &str) -> Box<dyn WordSource> {
    match dictionary {
        "embedded" => Box::new(EmbeddedSource),
        dir => Box::new(DirectorySource::new(dir)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = open_dictionary(&cli.dictionary);
    tracing::info!(dictionary = %cli.dictionary, "word source selected");

    match cli.command {
        Commands::Query {
            length,
            language,
            prefix,
            suffix,
            letters_at,
            contains,
            excludes,
            limit,
            count,
        } => {
            let config = QueryConfig {
                length,
                language,
                prefix,
                suffix,
                letters_at,
                contains,
                excludes,
                limit,
                count_only: count,
            };
            run_query_command(&config, source)
        }
        Commands::Stats {
            file,
            top,
            occurrences,
        } => run_stats_command(&file, top, occurrences),
        Commands::Languages => run_languages_command(source.as_ref()),
    }
}

fn run_query_command(config: &QueryConfig, source: Box<dyn WordSource>) -> Result<()> {
    let result = run_query(config, source)?;
    print_query_result(&result);
    Ok(())
}

fn run_stats_command(file: &Path, top: usize, occurrences: Option<usize>) -> Result<()> {
    let statistic = run_stats(file)?;
    print_statistic(&statistic, top, occurrences);
    Ok(())
}

fn run_languages_command(source: &dyn WordSource) -> Result<()> {
    let sizes = dictionary_sizes(source)?;
    print_languages(&sizes);
    Ok(())
}
