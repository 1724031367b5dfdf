//! Global frequency table and sentence saliency
//!
//! Tokens here are the plain space-split pieces of each sentence; stopwords
//! are not removed and nothing is lowercased. For every distinct token the
//! table records:
//!
//! - `count(t)`: occurrences summed over every sentence,
//! - `idf(t) = log2(N / df(t))`, where `df(t)` counts the sentences that
//!   contain `t` under the configured [`DocumentFrequency`] test.
//!
//! A sentence's saliency is the mean of `idf(t) * count(t)` over its tokens.
//! `count` is the document-wide total, not the sentence-local frequency.

use crate::nlp::tokenizer::split_tokens;
use crate::types::DocumentFrequency;
use rustc_hash::{FxHashMap, FxHashSet};

/// Token statistics derived from one loaded document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    /// Total occurrences of each token across all sentences
    counts: FxHashMap<String, usize>,
    /// Inverse document frequency of each token
    idf: FxHashMap<String, f64>,
    /// Number of sentences the table was built from
    sentence_count: usize,
}

impl FrequencyTable {
    /// Build the table from raw sentence texts
    pub fn build<S: AsRef<str>>(sentences: &[S], mode: DocumentFrequency) -> Self {
        let texts: Vec<&str> = sentences.iter().map(|s| s.as_ref()).collect();

        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for sentence in &texts {
            for token in split_tokens(sentence) {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        // Only needed for exact-token containment.
        let token_sets: Vec<FxHashSet<&str>> = match mode {
            DocumentFrequency::Substring => Vec::new(),
            DocumentFrequency::ExactToken => {
                texts.iter().map(|s| split_tokens(s).collect()).collect()
            }
        };

        let n = texts.len() as f64;
        let idf = counts
            .keys()
            .map(|token| {
                let containing = match mode {
                    DocumentFrequency::Substring => texts
                        .iter()
                        .filter(|s| s.contains(token.as_str()))
                        .count(),
                    DocumentFrequency::ExactToken => token_sets
                        .iter()
                        .filter(|set| set.contains(token.as_str()))
                        .count(),
                };
                // Every token came from some sentence, so `containing >= 1`.
                (token.clone(), (n / containing as f64).log2())
            })
            .collect();

        Self {
            counts,
            idf,
            sentence_count: texts.len(),
        }
    }

    /// Total occurrences of a token (0 if unseen)
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Inverse document frequency of a token (0 if unseen)
    pub fn idf(&self, token: &str) -> f64 {
        self.idf.get(token).copied().unwrap_or(0.0)
    }

    /// `idf(t) * count(t)`
    pub fn weight(&self, token: &str) -> f64 {
        self.idf(token) * self.count(token) as f64
    }

    /// Saliency of a sentence: mean token weight over its space-split tokens
    pub fn saliency(&self, sentence: &str) -> f64 {
        let mut total = 0.0;
        let mut tokens = 0usize;
        for token in split_tokens(sentence) {
            total += self.weight(token);
            tokens += 1;
        }
        // `split` always yields at least one (possibly empty) token.
        total / tokens as f64
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table holds no tokens
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of sentences the table was built from
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }
}
