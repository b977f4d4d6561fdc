//! Cell text measurement and preparation
//!
//! Cell text may contain embedded `\n` line breaks. Measurement counts
//! characters, not bytes, and splits on every `\n` so that a trailing
//! line break contributes an (empty) extra line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that take no display column and throw off alignment
    static ref ZERO_WIDTH: Regex = Regex::new("[\u{200B}\u{200C}\u{200D}\u{FEFF}]").unwrap();
}

/// Length in characters of the longest `\n`-separated line
pub fn longest_line_length(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Number of `\n`-separated lines; the empty string is one line
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Remove zero-width spaces, joiners and byte-order marks
pub fn clean_text(text: &str) -> String {
    ZERO_WIDTH.replace_all(text, "").into_owned()
}

/// Drop leading and trailing lines that are blank
pub fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let is_blank = |line: &&str| line.trim_end().is_empty();

    let start = match lines.iter().position(|l| !is_blank(l)) {
        Some(start) => start,
        None => return String::new(),
    };
    // position() found a non-blank line, so rposition() does too
    let end = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(start);

    lines[start..=end].join("\n")
}

/// Pad every line with one space on each side
pub fn cushion(text: &str) -> String {
    text.split('\n')
        .map(|line| format!(" {} ", line))
        .collect::<Vec<_>>()
        .join("\n")
}
