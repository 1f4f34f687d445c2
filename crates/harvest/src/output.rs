// ABOUTME: Dataset persistence: default file names, timestamps and pretty JSON writing.
// ABOUTME: save_json creates missing parent directories and reports the bytes written.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::HarvestError;

pub const NAMES_FILE: &str = "parsed_names.json";
pub const QUOTES_FILE: &str = "parsed_quotes.json";
pub const WORDS_FILE: &str = "parsed_words.json";

/// Directory the datasets are written to when no output path is given.
pub const DEFAULT_DATA_DIR: &str = "src/data";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, formatted for the `lastUpdated` field.
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Writes `value` as pretty-printed JSON and returns the file size in bytes.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<u64, HarvestError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let write_err = |e: anyhow::Error| HarvestError::write(&display, "SaveJson", Some(e));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_err(e.into()))?;
    }

    let mut json = serde_json::to_string_pretty(value).map_err(|e| write_err(e.into()))?;
    json.push('\n');
    fs::write(path, &json).map_err(|e| write_err(e.into()))?;

    Ok(json.len() as u64)
}
