// ABOUTME: Text helpers shared by the extractors: whitespace, Cyrillic checks and DOM text access.
// ABOUTME: Element text access on top of scraper: full descendant text, single-string lookup and parent markup.

use scraper::{ElementRef, Node};

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns true for the letters of the modern Russian alphabet (`А-Я`, `а-я`, `Ё`, `ё`).
pub fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

/// Returns true if `s` contains at least one Russian letter.
pub fn has_cyrillic(s: &str) -> bool {
    s.chars().any(is_cyrillic_letter)
}

/// Returns true if `s` is non-empty and made only of Russian letters.
pub fn is_cyrillic_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_cyrillic_letter)
}

/// Splits `s` into maximal runs of Russian letters.
pub fn cyrillic_tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !is_cyrillic_letter(c))
        .filter(|t| !t.is_empty())
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Concatenated text of every descendant text node, trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// The single string of an element.
///
/// Follows chains of single-child elements down to one text node and returns
/// it untrimmed. Elements with several children, or none, have no single string.
pub fn single_string(el: ElementRef<'_>) -> Option<String> {
    let mut node = *el;
    loop {
        let mut children = node.children();
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }
        match only.value() {
            Node::Text(text) => return Some(text.to_string()),
            Node::Element(_) => node = only,
            _ => return None,
        }
    }
}

/// Outer HTML of the parent element, used as classification context.
pub fn parent_html(el: ElementRef<'_>) -> String {
    el.parent()
        .and_then(ElementRef::wrap)
        .map(|p| p.html())
        .unwrap_or_default()
}
