//! Core types for sentence_textrank
//!
//! This module defines the sentence record, the closed strategy enums and the
//! engine configuration.

use crate::errors::{Result, SummaryError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the loaded text
///
/// Ranks are not stored here; they are recomputed per summary, see
/// [`Engine::ranks`](crate::Engine::ranks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, verbatim as segmented (may carry leading whitespace)
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Zero-based position within the document
    pub index: usize,
    /// Token collection produced by the configured encoding
    pub tokens: Vec<String>,
    /// Global-frequency-weighted importance
    pub saliency: f64,
}

impl Sentence {
    /// Create a new sentence with no tokens and zero saliency
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            tokens: Vec::new(),
            saliency: 0.0,
        }
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// How a sentence is turned into a token collection for similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Distinct space-separated tokens, case and padding untouched
    #[serde(alias = "bag_of_word")]
    BagOfWords,
    /// Every space-separated token, trimmed and lowercased, duplicates kept
    #[default]
    #[serde(alias = "as_they_are")]
    AsIs,
}

impl Encoding {
    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::BagOfWords => "bag_of_words",
            Encoding::AsIs => "as_is",
        }
    }
}

impl std::str::FromStr for Encoding {
    type Err = SummaryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "bag_of_words" | "bag_of_word" | "bagofwords" | "bow" => Ok(Encoding::BagOfWords),
            "as_is" | "as_they_are" | "asis" => Ok(Encoding::AsIs),
            other => Err(SummaryError::invalid_config(format!(
                "unknown encoding '{}'",
                other
            ))),
        }
    }
}

/// Similarity measure between two token collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// |intersection| / |union|
    #[default]
    Jaccard,
    /// |intersection| / min(|a|, |b|)
    Overlap,
}

impl Distance {
    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Distance::Jaccard => "jaccard",
            Distance::Overlap => "overlap",
        }
    }
}

impl std::str::FromStr for Distance {
    type Err = SummaryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "jaccard" => Ok(Distance::Jaccard),
            "overlap" => Ok(Distance::Overlap),
            other => Err(SummaryError::invalid_config(format!(
                "unknown distance '{}'",
                other
            ))),
        }
    }
}

/// How the saliency scorer decides that a sentence "contains" a token
/// when counting document frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFrequency {
    /// The token occurs anywhere in the raw sentence text, including inside
    /// a longer word ("cat" is found in "concatenate").
    #[default]
    Substring,
    /// The token is one of the sentence's space-separated tokens.
    ExactToken,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the summarization engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Token encoding used for sentence similarity
    pub encoding: Encoding,
    /// Similarity measure between encoded sentences
    pub distance: Distance,
    /// Weight of the propagated rank against the uniform baseline
    pub alpha: f64,
    /// Number of propagation steps (0 keeps the saliency seed)
    pub iterations: usize,
    /// Containment test used for inverse document frequency
    pub document_frequency: DocumentFrequency,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::AsIs,
            distance: Distance::Jaccard,
            alpha: 0.85,
            iterations: 100,
            document_frequency: DocumentFrequency::Substring,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(SummaryError::invalid_config(format!(
                "alpha must be between 0 and 1, got {}",
                self.alpha
            )));
        }

        Ok(())
    }

    /// Builder method: set encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Builder method: set distance
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }

    /// Builder method: set alpha (damping factor)
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder method: set iteration count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: set document frequency mode
    pub fn with_document_frequency(mut self, mode: DocumentFrequency) -> Self {
        self.document_frequency = mode;
        self
    }
}
