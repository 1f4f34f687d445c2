// ABOUTME: Names parser: pulls candidate names out of list pages and free text, split by gender.
// ABOUTME: Builds the parsed_names.json dataset with per-gender cleaned, deduplicated, sorted lists.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::Harvester;
use crate::error::HarvestError;
use crate::filters::{classify_gender, clean_name, extract_name_tokens, is_russian_name, Gender};
use crate::output::timestamp;
use crate::sources::{Section, Source, Strategy};
use crate::text::{element_text, parent_html};

static LIST_ITEMS: Lazy<Selector> = Lazy::new(|| Selector::parse("li, td, a").unwrap());
static TEXT_BLOCKS: Lazy<Selector> = Lazy::new(|| Selector::parse("div, span, p, li").unwrap());

/// Uncleaned names collected during a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNames {
    pub male: BTreeSet<String>,
    pub female: BTreeSet<String>,
}

impl RawNames {
    pub fn add(&mut self, name: &str, gender: Gender) {
        let bucket = match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        };
        bucket.insert(name.to_string());
    }

    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }
}

/// Contents of `parsed_names.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamesDataset {
    pub male_names: Vec<String>,
    pub female_names: Vec<String>,
    pub total_male: usize,
    pub total_female: usize,
    pub total_names: usize,
    pub sources: Vec<String>,
    pub last_updated: String,
}

/// One name per `li`/`td`/`a` element, classified with the parent's markup as context.
pub fn extract_name_list(doc: &Html, raw: &mut RawNames) {
    for el in doc.select(&LIST_ITEMS) {
        let text = element_text(el);
        if !is_russian_name(&text) {
            continue;
        }
        if let Some(gender) = classify_gender(&text, &parent_html(el)) {
            raw.add(&text, gender);
        }
    }
}

/// Every name-like token in `div`/`span`/`p`/`li` text.
pub fn extract_name_text(doc: &Html, raw: &mut RawNames) {
    for el in doc.select(&TEXT_BLOCKS) {
        let text = element_text(el);
        let tokens = extract_name_tokens(&text);
        if tokens.is_empty() {
            continue;
        }
        let context = parent_html(el);
        for token in tokens {
            if let Some(gender) = classify_gender(token, &context) {
                raw.add(token, gender);
            }
        }
    }
}

/// Applies the source's strategy to a fetched page.
pub fn extract_names(source: &Source, doc: &Html, raw: &mut RawNames) -> Result<(), HarvestError> {
    match &source.strategy {
        Strategy::NameList => extract_name_list(doc, raw),
        Strategy::NameText => extract_name_text(doc, raw),
        other => {
            return Err(HarvestError::extract(
                &source.url,
                "ExtractNames",
                Some(anyhow::anyhow!("strategy {:?} does not yield names", other)),
            ))
        }
    }
    Ok(())
}

fn clean_and_sort(names: &BTreeSet<String>) -> Vec<String> {
    names
        .iter()
        .filter_map(|n| clean_name(n))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Cleans each gender list separately and assembles the dataset.
pub fn build_names_dataset(raw: &RawNames, summary: &[String], last_updated: String) -> NamesDataset {
    let male_names = clean_and_sort(&raw.male);
    let female_names = clean_and_sort(&raw.female);
    NamesDataset {
        total_male: male_names.len(),
        total_female: female_names.len(),
        total_names: male_names.len() + female_names.len(),
        male_names,
        female_names,
        sources: summary.to_vec(),
        last_updated,
    }
}

/// Runs the whole names pipeline over a catalogue section.
pub async fn harvest_names(harvester: &Harvester, section: &Section) -> NamesDataset {
    info!(sources = section.sources.len(), "harvesting names");

    let mut raw = RawNames::default();
    let report = harvester
        .sweep(&section.sources, |source, doc| {
            if let Err(e) = extract_names(source, doc, &mut raw) {
                warn!(error = %e, "skipping page");
            }
        })
        .await;

    info!(
        visited = report.visited,
        failed = report.failed.len(),
        candidates = raw.len(),
        "names sweep finished"
    );
    if report.all_failed() {
        warn!(failed = report.failed.len(), "every source failed");
    }
    build_names_dataset(&raw, &section.summary, timestamp())
}
