//! Labeled-dataset loading.
//!
//! The dataset carries the upstream column names (`sentence`,
//! `contains_bad_word`) so an exported dataset can be dropped in unchanged.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use super::error::CorpusError;

/// One labeled entry from the reference dataset.
#[derive(Debug, Clone)]
pub struct LabeledSentence {
    pub text: String,
    pub is_abusive: bool,
}

impl LabeledSentence {
    pub fn new(text: impl Into<String>, is_abusive: bool) -> Self {
        Self {
            text: text.into(),
            is_abusive,
        }
    }
}

/// Source of labeled reference sentences (file, database, fixture).
pub trait CorpusSource {
    fn load(&self) -> Result<Vec<LabeledSentence>, CorpusError>;
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    sentence: String,
    contains_bad_word: u8,
}

/// Loads a JSON array of `{"sentence": .., "contains_bad_word": 0|1}`.
#[derive(Debug, Clone)]
pub struct JsonCorpusSource {
    path: PathBuf,
}

impl JsonCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for JsonCorpusSource {
    fn load(&self) -> Result<Vec<LabeledSentence>, CorpusError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CorpusError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;

        let entries: Vec<RawEntry> =
            serde_json::from_str(&raw).map_err(|source| CorpusError::ParseFailed {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            entries = entries.len(),
            "Loaded labeled dataset"
        );

        Ok(entries
            .into_iter()
            .map(|e| LabeledSentence {
                text: e.sentence,
                is_abusive: e.contains_bad_word != 0,
            })
            .collect())
    }
}
