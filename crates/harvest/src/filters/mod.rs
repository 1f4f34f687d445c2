// ABOUTME: Validity filters and classification heuristics for candidate strings.
// ABOUTME: Character-set, length and keyword-exclusion checks for names, quotes and words.

//! Validity filters.
//!
//! Every filter is a plain predicate or cleaner over `&str`; none of them
//! touches the DOM. The extractors in [`crate::parsers`] feed them candidate
//! strings and whatever context they need (the parent element HTML for names).

pub mod names;
pub mod quotes;
pub mod words;

pub use names::{classify_gender, clean_name, extract_name_tokens, is_russian_name, Gender};
pub use quotes::{clean_author, clean_quote_text, is_valid_quote, UNKNOWN_AUTHOR};
pub use words::{categorize, clean_word, is_valid_word, Category, CategorizedWords};
