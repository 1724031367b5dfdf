//! # sentence_textrank
//!
//! Extractive summarization with a saliency-seeded TextRank.
//!
//! Text is cut into sentences at runs of `.`, `!` and `?`, every pair of
//! sentences is compared with a set-similarity metric, each sentence gets a
//! TF-IDF derived saliency, and a fixed number of PageRank-style steps
//! combines both into a rank. The best `k` sentences are returned in
//! document order.
//!
//! ```
//! use sentence_textrank::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! engine.load("The cat sat. A dog ran fast. The cat and dog played.").unwrap();
//! let summary = engine.summarize(|_| 2).unwrap();
//! assert_eq!(summary.matches('.').count(), 2);
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod saliency;
pub mod service;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{Distance, DocumentFrequency, Encoding, EngineConfig, Sentence};

// Re-export main functionality
pub use graph::builder::SimilarityGraph;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{segment, segment_sentences};
pub use pagerank::{propagation::SaliencyPageRank, CancellationToken, PageRankResult};
pub use saliency::FrequencyTable;
pub use service::{
    collect_content, handle_message, summarize_page, ContentSource, SummarizeOptions,
    SummarizeRequest, SummarizeResponse,
};
pub use summarizer::engine::{Engine, EngineState, LoadedDocument};
pub use summarizer::selector::{SelectedSentence, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
