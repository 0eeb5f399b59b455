//! Read time estimation

use lazy_static::lazy_static;
use regex::Regex;

/// Reading speed used for every estimate
pub const WORDS_PER_MINUTE: usize = 150;

lazy_static! {
    /// A `---` fenced block at the very start of the text
    static ref LEADING_FRONTMATTER: Regex = Regex::new(r"\A---[\s\S]*?---").unwrap();
    /// A newline, optional whitespace, then another newline
    static ref BLANK_RUN: Regex = Regex::new(r"\n[\s\x{FEFF}]*\n").unwrap();
    /// Lines holding nothing but whitespace
    static ref BLANK_LINE: Regex = Regex::new(r"(?m)^[\s\x{FEFF}]*[\r\n]").unwrap();
    /// Separator between words. U+FEFF counts as whitespace too.
    static ref WORD_BREAK: Regex = Regex::new(r"[\s\x{FEFF}]+").unwrap();
}

/// Estimate the reading time of raw markdown, in whole minutes.
///
/// Frontmatter and blank lines are removed before counting whitespace
/// separated words. The result is never below one minute.
///
/// # Examples
/// ```ignore
/// estimate(&"word ".repeat(300)) // -> 2
/// ```
pub fn estimate(content: &str) -> u32 {
    let words = word_count(content);
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}

/// Count the words that [`estimate`] bases its result on.
///
/// Empty or whitespace-only input counts as zero words.
pub fn word_count(content: &str) -> usize {
    let without_frontmatter = LEADING_FRONTMATTER.replace(content, "");
    let collapsed = BLANK_RUN.replace_all(&without_frontmatter, "\n");
    let cleaned = BLANK_LINE.replace_all(&collapsed, "");

    WORD_BREAK
        .split(&cleaned)
        .filter(|word| !word.is_empty())
        .count()
}
