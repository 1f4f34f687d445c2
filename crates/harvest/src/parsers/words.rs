// ABOUTME: Words parser: link captions of Cyrillic wiki articles and single-word elements.
// ABOUTME: Merges the embedded common-word list and builds the categorized parsed_words.json dataset.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use tracing::{info, warn};

use crate::client::Harvester;
use crate::error::HarvestError;
use crate::filters::{categorize, clean_word, is_valid_word, CategorizedWords};
use crate::output::timestamp;
use crate::sources::{Section, Source, Strategy};
use crate::text::{element_text, is_cyrillic_word, single_string};

const COMMON_WORDS_TXT: &str = include_str!("../../data/common_words.txt");

// Wiktionary hrefs are usually percent-encoded; Cyrillic letters start with D0 or D1.
static ARTICLE_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/wiki/(?:[А-Яа-яЁё]|%D0%|%D1%)").unwrap());

static LINKS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static TOKEN_ELEMENTS: Lazy<Selector> = Lazy::new(|| Selector::parse("a, span, div").unwrap());

/// Contents of `parsed_words.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsDataset {
    pub words: Vec<String>,
    pub categorized_words: CategorizedWords,
    pub total_words: usize,
    pub sources: Vec<String>,
    pub last_updated: String,
}

/// The built-in list of frequent words, in file order.
pub fn common_words() -> Vec<&'static str> {
    COMMON_WORDS_TXT
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

/// Captions of links pointing at Cyrillic wiki articles.
pub fn extract_word_links(doc: &Html, out: &mut BTreeSet<String>) {
    for link in doc.select(&LINKS) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !ARTICLE_HREF.is_match(href) {
            continue;
        }
        let word = element_text(link);
        if is_valid_word(&word) {
            out.insert(word);
        }
    }
}

/// `a`/`span`/`div` elements whose only text is one Cyrillic word.
pub fn extract_word_tokens(doc: &Html, out: &mut BTreeSet<String>) {
    for el in doc.select(&TOKEN_ELEMENTS) {
        if !single_string(el).is_some_and(|s| is_cyrillic_word(&s)) {
            continue;
        }
        let word = element_text(el);
        if is_valid_word(&word) {
            out.insert(word);
        }
    }
}

/// Applies the source's strategy to a fetched page.
pub fn extract_words(
    source: &Source,
    doc: &Html,
    out: &mut BTreeSet<String>,
) -> Result<(), HarvestError> {
    match &source.strategy {
        Strategy::WordLinks => extract_word_links(doc, out),
        Strategy::WordTokens => extract_word_tokens(doc, out),
        other => {
            return Err(HarvestError::extract(
                &source.url,
                "ExtractWords",
                Some(anyhow::anyhow!("strategy {:?} does not yield words", other)),
            ))
        }
    }
    Ok(())
}

/// Cleans, validates, deduplicates and sorts words, then categorizes them.
pub fn build_words_dataset<S: AsRef<str>>(
    raw: &[S],
    summary: &[String],
    last_updated: String,
) -> WordsDataset {
    let words: Vec<String> = raw
        .iter()
        .map(|w| clean_word(w.as_ref()))
        .filter(|w| is_valid_word(w))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    WordsDataset {
        categorized_words: categorize(&words),
        total_words: words.len(),
        words,
        sources: summary.to_vec(),
        last_updated,
    }
}

/// Runs the whole words pipeline over a catalogue section.
///
/// The built-in common words are merged in unless `include_common` is false.
pub async fn harvest_words(
    harvester: &Harvester,
    section: &Section,
    include_common: bool,
) -> WordsDataset {
    info!(sources = section.sources.len(), "harvesting words");

    let mut raw = BTreeSet::new();
    let report = harvester
        .sweep(&section.sources, |source, doc| {
            if let Err(e) = extract_words(source, doc, &mut raw) {
                warn!(error = %e, "skipping page");
            }
        })
        .await;

    info!(
        visited = report.visited,
        failed = report.failed.len(),
        candidates = raw.len(),
        "words sweep finished"
    );
    if report.all_failed() {
        warn!(failed = report.failed.len(), "every source failed");
    }

    if include_common {
        raw.extend(common_words().into_iter().map(String::from));
    }
    let raw: Vec<String> = raw.into_iter().collect();
    build_words_dataset(&raw, &section.summary, timestamp())
}
