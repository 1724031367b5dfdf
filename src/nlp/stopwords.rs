//! Stopword filtering
//!
//! The engine only knows a small fixed English list. Membership is exact:
//! no case folding happens here, so `"The"` survives unless the encoding
//! lowercased it first.

use rustc_hash::FxHashSet;

/// The built-in English stopwords
pub const ENGLISH_STOPWORDS: [&str; 7] = ["the", "is", "in", "and", "to", "a", "of"];

/// A filter for removing stopwords from token collections
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<&'static str>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create the English stopword filter
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Get the built-in stopword list
    pub fn built_in_list() -> Vec<String> {
        ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect()
    }

    /// Check if a token is a stopword (case-sensitive)
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Drop stopwords, keeping the order and multiplicity of the rest
    pub fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    /// Get the number of stopwords
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
