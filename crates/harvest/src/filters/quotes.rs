// ABOUTME: Quote validity filter and text/author cleaners.
// ABOUTME: Rejects page chrome, bare numbers and unpunctuated fragments; strips quotation marks.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::text::{has_cyrillic, is_cyrillic_letter, normalize_whitespace};

/// Author recorded when a source gives none.
pub const UNKNOWN_AUTHOR: &str = "Неизвестный автор";

const MIN_QUOTE_CHARS: usize = 10;
const MAX_QUOTE_CHARS: usize = 500;

static TECHNICAL_WORDS: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(["категория", "страница", "вики", "ссылка"]).unwrap());

const QUOTE_MARKS: &[char] = &['"', '\'', '«', '»', '“', '”', '„'];

/// Returns true if `text` is acceptable as a quote body.
///
/// A quote is 10 to 500 characters, contains Russian letters and some
/// punctuation, is not just digits, and mentions none of the wiki chrome words.
pub fn is_valid_quote(text: &str) -> bool {
    let len = text.chars().count();
    if !(MIN_QUOTE_CHARS..=MAX_QUOTE_CHARS).contains(&len) {
        return false;
    }

    if !has_cyrillic(text) {
        return false;
    }

    let lower = text.to_lowercase();
    if lower.chars().all(|c| c.is_numeric()) {
        return false;
    }
    // letters and spaces only: headings and link captions, not sentences
    if lower
        .chars()
        .all(|c| is_cyrillic_letter(c) || c.is_whitespace())
    {
        return false;
    }
    !TECHNICAL_WORDS.is_match(&lower)
}

/// Collapses whitespace and strips surrounding quotation marks.
pub fn clean_quote_text(text: &str) -> String {
    normalize_whitespace(text)
        .trim_matches(QUOTE_MARKS)
        .trim()
        .to_string()
}

/// Keeps word characters, whitespace, hyphens and dots, then trims.
pub fn clean_author(author: &str) -> String {
    author
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}
