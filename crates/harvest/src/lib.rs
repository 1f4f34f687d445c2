// ABOUTME: Main library entry point for the Russian names, quotes and words harvesters.
// ABOUTME: Re-exports the public API: Harvester, HarvesterBuilder, HarvestError, the catalogue and the datasets.

//! randgen-harvest - scrapers that build Russian-language datasets for a
//! random content generator.
//!
//! Each pipeline walks one section of a [`SourceCatalog`], fetches the pages
//! one after another with a politeness delay, extracts candidates with the
//! page's [`Strategy`], then filters, cleans and deduplicates them into a
//! dataset that serializes to the `parsed_*.json` files.
//!
//! # Example
//!
//! ```no_run
//! use randgen_harvest::{harvest_quotes, load_builtin_catalog, save_json, Harvester};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), randgen_harvest::HarvestError> {
//!     let harvester = Harvester::builder().build();
//!     let catalog = load_builtin_catalog();
//!     let dataset = harvest_quotes(&harvester, &catalog.quotes).await;
//!     save_json("parsed_quotes.json", &dataset)?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod error;
pub mod filters;
pub mod options;
pub mod output;
pub mod parsers;
pub mod resource;
pub mod sources;
pub mod text;

pub use crate::client::{Harvester, SweepReport};
pub use crate::error::{ErrorCode, HarvestError};
pub use crate::options::{HarvesterBuilder, Options};
pub use crate::output::{save_json, timestamp, NAMES_FILE, QUOTES_FILE, WORDS_FILE};
pub use crate::parsers::{
    harvest_names, harvest_quotes, harvest_words, NamesDataset, Quote, QuotesDataset,
    WordsDataset,
};
pub use crate::sources::{
    load_builtin_catalog, load_catalog_file, Section, Source, SourceCatalog, Strategy,
};
