//! Heuristic data tables driving the eligibility, corpus and validation
//! filters.
//!
//! The tables are data, not control flow: they ship with builtin defaults
//! (the precision-tuned Indonesian/English-slang set) and can be replaced at
//! startup from a versioned JSON file via [`Lexicon::from_file`], so
//! heuristics are tunable without recompilation.

pub mod error;


pub use error::LexiconError;

use std::path::Path;

use aho_corasick::AhoCorasick;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use tracing::info;

mod tables;

/// On-disk representation of the heuristic tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconFile {
    /// Schema/tuning version, logged at load time.
    pub version: u32,
    /// Praise/thanks/positive-emotion substrings that disqualify a comment.
    pub positive_indicators: Vec<String>,
    /// Anchored regexes for boilerplate comments (greetings, laughter,
    /// ordinals, bare numbers, dates).
    pub boilerplate_patterns: Vec<String>,
    /// Commercial/medical/educational context markers that prune reference
    /// sentences.
    pub noise_markers: Vec<String>,
    /// Explicit abusive terms, including common obfuscated spellings.
    pub explicit_terms: Vec<String>,
    /// High-precision subset of explicit terms used for confidence boosting.
    pub high_precision_terms: Vec<String>,
}

impl Default for LexiconFile {
    fn default() -> Self {
        Self {
            version: tables::BUILTIN_VERSION,
            positive_indicators: to_strings(tables::POSITIVE_INDICATORS),
            boilerplate_patterns: to_strings(tables::BOILERPLATE_PATTERNS),
            noise_markers: to_strings(tables::NOISE_MARKERS),
            explicit_terms: to_strings(tables::EXPLICIT_TERMS),
            high_precision_terms: to_strings(tables::HIGH_PRECISION_TERMS),
        }
    }
}

fn to_strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Compiled heuristic tables, shared read-only across the pipeline.
///
/// All substring lexicons match against *lowercased* text; entries are
/// expected to be lowercase already.
pub struct Lexicon {
    version: u32,
    positive: AhoCorasick,
    noise: AhoCorasick,
    explicit: AhoCorasick,
    high_precision: AhoCorasick,
    boilerplate: RegexSet,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("version", &self.version)
            .field("positive_indicators", &self.positive.patterns_len())
            .field("noise_markers", &self.noise.patterns_len())
            .field("explicit_terms", &self.explicit.patterns_len())
            .field("boilerplate_patterns", &self.boilerplate.len())
            .finish()
    }
}

impl Lexicon {
    /// Compiles the builtin tables.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::compile(LexiconFile::default())
    }

    /// Loads and compiles tables from a versioned JSON file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let file: LexiconFile =
            serde_json::from_str(&raw).map_err(|source| LexiconError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            version = file.version,
            "Loading lexicon from file"
        );
        Self::compile(file)
    }

    /// Compiles an in-memory table set into matchers.
    pub fn compile(file: LexiconFile) -> Result<Self, LexiconError> {
        let build = |name: &'static str, patterns: &[String]| {
            AhoCorasick::new(patterns).map_err(|e| LexiconError::CompileFailed {
                table: name,
                reason: e.to_string(),
            })
        };

        // Positive indicators match on word boundaries: short entries like
        // "ok" would otherwise fire inside slurs ("goblok") and suppress
        // exactly the comments this pipeline exists to catch.
        let padded: Vec<String> = file
            .positive_indicators
            .iter()
            .map(|p| format!(" {p} "))
            .collect();
        let positive = build("positive_indicators", &padded)?;
        let noise = build("noise_markers", &file.noise_markers)?;
        let explicit = build("explicit_terms", &file.explicit_terms)?;
        let high_precision = build("high_precision_terms", &file.high_precision_terms)?;

        let boilerplate =
            RegexSet::new(&file.boilerplate_patterns).map_err(|e| LexiconError::CompileFailed {
                table: "boilerplate_patterns",
                reason: e.to_string(),
            })?;

        Ok(Self {
            version: file.version,
            positive,
            noise,
            explicit,
            high_precision,
            boilerplate,
        })
    }

    /// Table version (builtin or from file).
    pub fn version(&self) -> u32 {
        self.version
    }

    /// True if the lowercased text contains any positive indicator as a
    /// whole word (or word sequence, for phrase entries).
    pub fn has_positive_indicator(&self, lower: &str) -> bool {
        self.positive.is_match(format!(" {lower} ").as_str())
    }

    /// True if the lowercased text contains any noise-context marker.
    pub fn has_noise_marker(&self, lower: &str) -> bool {
        self.noise.is_match(lower)
    }

    /// True if the lowercased text matches any boilerplate pattern.
    pub fn matches_boilerplate(&self, lower: &str) -> bool {
        self.boilerplate.is_match(lower)
    }

    /// True if the lowercased text contains any explicit abusive term.
    pub fn has_explicit_term(&self, lower: &str) -> bool {
        self.explicit.is_match(lower)
    }

    /// True if the lowercased text contains a high-precision explicit term.
    pub fn has_high_precision_term(&self, lower: &str) -> bool {
        self.high_precision.is_match(lower)
    }
}
