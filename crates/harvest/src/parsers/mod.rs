// ABOUTME: The three dataset pipelines: names, quotes and words.
// ABOUTME: Each sweeps its catalogue section, extracts candidates per strategy and builds a dataset.

pub mod names;
pub mod quotes;
pub mod words;

pub use names::{build_names_dataset, harvest_names, NamesDataset, RawNames};
pub use quotes::{build_quotes_dataset, clean_quote, harvest_quotes, Quote, QuotesDataset};
pub use words::{build_words_dataset, common_words, harvest_words, WordsDataset};
