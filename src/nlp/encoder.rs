//! Token encodings
//!
//! Turns a sentence into the token collection compared by the similarity
//! metrics. Both encodings split on the space character and finish by
//! removing stopwords.

use super::stopwords::StopwordFilter;
use super::tokenizer::split_tokens;
use crate::types::Encoding;
use rustc_hash::FxHashSet;

impl Encoding {
    /// Encode a sentence into its token collection
    pub fn encode(&self, sentence: &str, stopwords: &StopwordFilter) -> Vec<String> {
        let tokens = match self {
            Encoding::BagOfWords => {
                let mut seen = FxHashSet::default();
                split_tokens(sentence)
                    .filter(|t| seen.insert(*t))
                    .map(str::to_string)
                    .collect()
            }
            Encoding::AsIs => split_tokens(sentence)
                .map(|t| t.trim().to_lowercase())
                .collect(),
        };
        stopwords.remove_stopwords(tokens)
    }
}
