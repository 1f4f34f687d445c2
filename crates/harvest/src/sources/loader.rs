// ABOUTME: Loader for source catalogues from the embedded JSON data or a file on disk.
// ABOUTME: Provides load_builtin_catalog() and load_catalog_file().

use std::fs;
use std::path::Path;

use crate::error::HarvestError;
use crate::sources::SourceCatalog;

/// Embedded JSON listing the production sources of every parser.
const BUILTIN_SOURCES_JSON: &str = include_str!("../../data/sources.json");

/// Loads the builtin source catalogue from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or cannot be deserialized.
pub fn load_builtin_catalog() -> SourceCatalog {
    serde_json::from_str(BUILTIN_SOURCES_JSON).expect("failed to parse builtin sources")
}

/// Loads a source catalogue from a JSON file.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<SourceCatalog, HarvestError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|e| {
        HarvestError::config(&display, "LoadCatalog", Some(anyhow::Error::new(e)))
    })?;

    serde_json::from_str(&raw)
        .map_err(|e| HarvestError::config(&display, "LoadCatalog", Some(anyhow::Error::new(e))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Strategy;

    #[test]
    fn load_builtin_catalog_succeeds() {
        let catalog = load_builtin_catalog();
        assert_eq!(catalog.names.sources.len(), 5);
        assert_eq!(catalog.quotes.sources.len(), 12);
        assert_eq!(catalog.words.sources.len(), 4);
        assert_eq!(catalog.words.summary.len(), 3);
    }

    #[test]
    fn builtin_wikipedia_sources_use_short_delay() {
        let catalog = load_builtin_catalog();
        let wiki: Vec<_> = catalog
            .names
            .sources
            .iter()
            .filter(|s| s.url.contains("wikipedia.org"))
            .collect();
        assert_eq!(wiki.len(), 3);
        assert!(wiki.iter().all(|s| s.delay_ms == Some(1000)));
        assert!(wiki.iter().all(|s| s.strategy == Strategy::NameList));
    }

    #[test]
    fn builtin_quote_pairs_source() {
        let catalog = load_builtin_catalog();
        let last = catalog.quotes.sources.last().unwrap();
        assert_eq!(
            last.strategy,
            Strategy::QuotePairs {
                quote: ".quote-text".to_string(),
                author: ".quote-author".to_string()
            }
        );
    }

    #[test]
    fn load_catalog_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"words":{"summary":["test"],"sources":[{"url":"http://127.0.0.1/w","strategy":{"type":"word_tokens"},"delay_ms":0}]}}"#,
        )
        .unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.words.sources.len(), 1);
        assert_eq!(catalog.words.sources[0].delay_ms, Some(0));
        assert!(catalog.names.sources.is_empty());
    }

    #[test]
    fn load_catalog_file_missing_is_config_error() {
        let err = load_catalog_file("/definitely/not/here.json").unwrap_err();
        assert!(err.is_config());
        assert!(err.url.contains("here.json"));
    }

    #[test]
    fn load_catalog_file_malformed_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_catalog_file(&path).unwrap_err();
        assert!(err.is_config());
    }
}
