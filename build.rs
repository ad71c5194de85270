//! Build script to generate embedded dictionaries
//!
//! Reads the per-language word files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words_ru.txt",
        &Path::new(&out_dir).join("words_ru.rs"),
        "WORDS_RU",
        "Embedded Russian dictionary",
    );

    generate_word_list(
        "data/words_en.txt",
        &Path::new(&out_dir).join("words_en.rs"),
        "WORDS_EN",
        "Embedded English dictionary",
    );

    // Rebuild if dictionaries change
    println!("cargo:rerun-if-changed=data/words_ru.txt");
    println!("cargo:rerun-if-changed=data/words_en.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Same line rules as `dictionary::parse_words`: keep order and duplicates, drop trailing whitespace
    let words: Vec<&str> = content.lines().map(str::trim_end).collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
