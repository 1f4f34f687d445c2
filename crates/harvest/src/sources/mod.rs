// ABOUTME: Source catalogue data model: which pages each parser visits and how to read them.
// ABOUTME: Deserialized from the embedded catalogue or a user-supplied JSON file.

//! Source catalogue.
//!
//! A catalogue has one [`Section`] per parser. Each section lists the pages to
//! fetch, in order, together with the extraction [`Strategy`] to apply and an
//! optional politeness delay. The `summary` lines are copied verbatim into the
//! `sources` field of the output file.

pub mod loader;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use loader::{load_builtin_catalog, load_catalog_file};

/// How candidate strings are pulled out of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    /// Whole text of `li`, `td` and `a` elements, one name per element.
    NameList,
    /// Cyrillic tokens inside `div`, `span`, `p` and `li` text.
    NameText,
    /// Blocks whose class mentions quote/text/content, author from an `author` class.
    QuoteBlocks,
    /// Wikiquote person page: author from `h1`, quotes from `li` and `p`.
    Wikiquote,
    /// Quote and author selectors zipped by position.
    QuotePairs { quote: String, author: String },
    /// Captions of links to Cyrillic wiki articles.
    WordLinks,
    /// Elements whose only text is a single Cyrillic word.
    WordTokens,
}

/// One page to visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    /// Short origin label recorded on extracted items.
    #[serde(default)]
    pub label: String,
    pub strategy: Strategy,
    /// Pause after this page, in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

impl Source {
    /// Delay configured on the source, if any.
    pub fn delay(&self) -> Option<Duration> {
        self.delay_ms.map(Duration::from_millis)
    }
}

/// The pages of a single parser plus the human-readable summary of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Sections for all three parsers. Missing sections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    #[serde(default)]
    pub names: Section,
    #[serde(default)]
    pub quotes: Section,
    #[serde(default)]
    pub words: Section,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_deserializes_tagged() {
        let s: Strategy =
            serde_json::from_str(r#"{"type":"quote_pairs","quote":".q","author":".a"}"#).unwrap();
        assert_eq!(
            s,
            Strategy::QuotePairs {
                quote: ".q".to_string(),
                author: ".a".to_string()
            }
        );
        let s: Strategy = serde_json::from_str(r#"{"type":"word_links"}"#).unwrap();
        assert_eq!(s, Strategy::WordLinks);
    }

    #[test]
    fn source_defaults() {
        let src: Source = serde_json::from_str(
            r#"{"url":"http://example.com","strategy":{"type":"name_list"}}"#,
        )
        .unwrap();
        assert_eq!(src.label, "");
        assert_eq!(src.delay(), None);
    }

    #[test]
    fn missing_sections_are_empty() {
        let catalog: SourceCatalog = serde_json::from_str(r#"{"quotes":{"sources":[]}}"#).unwrap();
        assert!(catalog.names.sources.is_empty());
        assert!(catalog.words.summary.is_empty());
    }
}
