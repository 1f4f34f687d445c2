// ABOUTME: Quotes parser: quote blocks with nearby authors, wikiquote person pages and selector pairs.
// ABOUTME: Builds the parsed_quotes.json dataset, cleaned and deduplicated case-insensitively.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::Harvester;
use crate::error::HarvestError;
use crate::filters::{clean_author, clean_quote_text, is_valid_quote, UNKNOWN_AUTHOR};
use crate::output::timestamp;
use crate::sources::{Section, Source, Strategy};
use crate::text::{element_text, has_cyrillic, single_string};

/// Recorded when a quote carries no source label.
pub const UNKNOWN_SOURCE: &str = "Неизвестный источник";

static QUOTE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"quote|text|content").unwrap());
static AUTHOR_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"author").unwrap());

static BLOCKS: Lazy<Selector> = Lazy::new(|| Selector::parse("div, blockquote, p").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static WIKI_ITEMS: Lazy<Selector> = Lazy::new(|| Selector::parse("li, p").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub source: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            source: source.into(),
        }
    }
}

/// Contents of `parsed_quotes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesDataset {
    pub quotes: Vec<Quote>,
    pub total_quotes: usize,
    pub sources: Vec<String>,
    pub last_updated: String,
}

fn has_class(el: ElementRef<'_>, pattern: &Regex) -> bool {
    el.value().classes().any(|c| pattern.is_match(c))
}

/// First element below `root` (excluding `root` itself) with an author class.
fn find_author_below(root: ElementRef<'_>) -> Option<String> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| has_class(*el, &AUTHOR_CLASS))
        .map(element_text)
}

/// Author of a quote block: inside the block first, then anywhere in its parent.
fn block_author(el: ElementRef<'_>) -> String {
    find_author_below(el)
        .or_else(|| {
            el.parent()
                .and_then(ElementRef::wrap)
                .and_then(find_author_below)
        })
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// `div`/`blockquote`/`p` elements with a quote-like class.
pub fn extract_quote_blocks(doc: &Html, label: &str, out: &mut Vec<Quote>) {
    for el in doc.select(&BLOCKS) {
        if !has_class(el, &QUOTE_CLASS) {
            continue;
        }
        let text = element_text(el);
        if !is_valid_quote(&text) {
            continue;
        }
        out.push(Quote::new(text, block_author(el), label));
    }
}

/// Wikiquote person page: one author from the heading, quotes from list items and paragraphs.
pub fn extract_wikiquote(doc: &Html, label: &str, out: &mut Vec<Quote>) {
    let author = doc
        .select(&HEADING)
        .next()
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    for el in doc.select(&WIKI_ITEMS) {
        if !single_string(el).is_some_and(|s| has_cyrillic(&s)) {
            continue;
        }
        let text = element_text(el);
        if is_valid_quote(&text) {
            out.push(Quote::new(text, author.clone(), label));
        }
    }
}

fn parse_selector(url: &str, css: &str) -> Result<Selector, HarvestError> {
    Selector::parse(css).map_err(|e| {
        HarvestError::extract(
            url,
            "QuotePairs",
            Some(anyhow::anyhow!("invalid selector {css:?}: {e}")),
        )
    })
}

/// Quote and author selectors matched up by position.
pub fn extract_quote_pairs(
    doc: &Html,
    url: &str,
    label: &str,
    quote_css: &str,
    author_css: &str,
    out: &mut Vec<Quote>,
) -> Result<(), HarvestError> {
    let quote_sel = parse_selector(url, quote_css)?;
    let author_sel = parse_selector(url, author_css)?;

    let authors: Vec<String> = doc.select(&author_sel).map(element_text).collect();
    for (i, el) in doc.select(&quote_sel).enumerate() {
        let text = element_text(el);
        if !is_valid_quote(&text) {
            continue;
        }
        let author = authors
            .get(i)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        out.push(Quote::new(text, author, label));
    }
    Ok(())
}

/// Applies the source's strategy to a fetched page.
pub fn extract_quotes(source: &Source, doc: &Html, out: &mut Vec<Quote>) -> Result<(), HarvestError> {
    match &source.strategy {
        Strategy::QuoteBlocks => extract_quote_blocks(doc, &source.label, out),
        Strategy::Wikiquote => extract_wikiquote(doc, &source.label, out),
        Strategy::QuotePairs { quote, author } => {
            extract_quote_pairs(doc, &source.url, &source.label, quote, author, out)?
        }
        other => {
            return Err(HarvestError::extract(
                &source.url,
                "ExtractQuotes",
                Some(anyhow::anyhow!("strategy {:?} does not yield quotes", other)),
            ))
        }
    }
    Ok(())
}

/// Normalizes text, author and source of a raw quote.
///
/// Blank authors and sources fall back to placeholders.
pub fn clean_quote(quote: &Quote) -> Quote {
    let author = clean_author(&quote.author);
    let source = quote.source.trim();
    Quote {
        text: clean_quote_text(&quote.text),
        author: if author.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            author
        },
        source: if source.is_empty() {
            UNKNOWN_SOURCE.to_string()
        } else {
            source.to_string()
        },
    }
}

/// Cleans, re-validates and deduplicates quotes, keeping first occurrences in order.
pub fn build_quotes_dataset(raw: &[Quote], summary: &[String], last_updated: String) -> QuotesDataset {
    let mut seen = HashSet::new();
    let quotes: Vec<Quote> = raw
        .iter()
        .map(clean_quote)
        .filter(|q| is_valid_quote(&q.text))
        .filter(|q| seen.insert(q.text.to_lowercase()))
        .collect();

    QuotesDataset {
        total_quotes: quotes.len(),
        quotes,
        sources: summary.to_vec(),
        last_updated,
    }
}

/// Runs the whole quotes pipeline over a catalogue section.
pub async fn harvest_quotes(harvester: &Harvester, section: &Section) -> QuotesDataset {
    info!(sources = section.sources.len(), "harvesting quotes");

    let mut raw = Vec::new();
    let report = harvester
        .sweep(&section.sources, |source, doc| {
            if let Err(e) = extract_quotes(source, doc, &mut raw) {
                warn!(error = %e, "skipping page");
            }
        })
        .await;

    info!(
        visited = report.visited,
        failed = report.failed.len(),
        candidates = raw.len(),
        "quotes sweep finished"
    );
    if report.all_failed() {
        warn!(failed = report.failed.len(), "every source failed");
    }
    build_quotes_dataset(&raw, &section.summary, timestamp())
}
