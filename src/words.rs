//! Loading word records handed over by the search layer.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::WordRecord;

/// Sample words compiled into the binary.
const BUNDLED_WORDS: &str = include_str!("../bundled/yoga-poses.json");

/// A words file holds a single record or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordsFile {
    Many(Vec<WordRecord>),
    One(WordRecord),
}

impl From<WordsFile> for Vec<WordRecord> {
    fn from(file: WordsFile) -> Self {
        match file {
            WordsFile::Many(words) => words,
            WordsFile::One(word) => vec![word],
        }
    }
}

/// Get default words file location.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordcard")
        .join("words.json")
}

pub fn parse_words(json: &str) -> Result<Vec<WordRecord>> {
    let file: WordsFile = serde_json::from_str(json)?;
    Ok(file.into())
}

/// Load words from a file.
pub fn load_words(path: &Path) -> Result<Vec<WordRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read words file: {:?}", path))?;
    let words = parse_words(&json)
        .with_context(|| format!("Failed to parse words file: {:?}", path))?;

    tracing::info!(?path, count = words.len(), "loaded words");
    Ok(words)
}

pub fn bundled_words() -> Result<Vec<WordRecord>> {
    parse_words(BUNDLED_WORDS).context("Failed to parse bundled words")
}

/// Pick the words to show: an explicit file must load, the default
/// location is optional and falls back to the bundled sample.
pub fn resolve_words(explicit: Option<&Path>) -> Result<Vec<WordRecord>> {
    if let Some(path) = explicit {
        return load_words(path);
    }

    let path = default_path();
    if path.exists() {
        return load_words(&path);
    }

    tracing::info!(?path, "no words file, using bundled sample");
    bundled_words()
}
