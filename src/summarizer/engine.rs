//! The summarization engine
//!
//! An [`Engine`] is either unloaded or holds one immutable
//! [`LoadedDocument`]. `load` builds a complete new snapshot before touching
//! the engine, so a failing load leaves the previous state in place.

use super::selector::{self, Summary};
use crate::errors::{Result, SummaryError};
use crate::graph::builder::SimilarityGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::segment_sentences;
use crate::pagerank::propagation::SaliencyPageRank;
use crate::pagerank::{CancellationToken, PageRankResult};
use crate::saliency::FrequencyTable;
use crate::types::{EngineConfig, Sentence};

/// Enter a tracing span for an engine stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("engine_stage", stage = $name).entered();
    };
}

/// Everything derived from one loaded text
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    sentences: Vec<Sentence>,
    graph: SimilarityGraph,
    frequencies: FrequencyTable,
}

impl LoadedDocument {
    /// Segment, encode and score `text` under `config`.
    pub fn build(text: &str, config: &EngineConfig, stopwords: &StopwordFilter) -> Result<Self> {
        let mut sentences = {
            trace_stage!("segment");
            segment_sentences(text)?
        };

        let encoded: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| config.encoding.encode(&s.text, stopwords))
            .collect();

        let graph = {
            trace_stage!("graph");
            SimilarityGraph::build(&encoded, config.distance)
        };

        let frequencies = {
            trace_stage!("saliency");
            let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
            FrequencyTable::build(&texts, config.document_frequency)
        };

        for (sentence, tokens) in sentences.iter_mut().zip(encoded) {
            sentence.tokens = tokens;
            sentence.saliency = frequencies.saliency(&sentence.text);
        }

        Ok(Self {
            sentences,
            graph,
            frequencies,
        })
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// The row-normalized similarity graph
    pub fn graph(&self) -> &SimilarityGraph {
        &self.graph
    }

    /// Token statistics
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Saliency of every sentence, the propagation seed
    pub fn saliency(&self) -> Vec<f64> {
        self.sentences.iter().map(|s| s.saliency).collect()
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false: a loaded document has at least one sentence
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Lifecycle of an engine
#[derive(Debug, Clone, Default)]
pub enum EngineState {
    /// No text loaded yet
    #[default]
    Unloaded,
    /// A document is loaded and ready to summarize
    Loaded(LoadedDocument),
}

/// Extractive summarizer over one loaded text at a time
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    stopwords: StopwordFilter,
    state: EngineState,
}

impl Engine {
    /// Create an unloaded engine, validating the config
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stopwords: StopwordFilter::english(),
            state: EngineState::Unloaded,
        })
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Check if a document is loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, EngineState::Loaded(_))
    }

    /// The loaded document
    pub fn document(&self) -> Result<&LoadedDocument> {
        match &self.state {
            EngineState::Loaded(doc) => Ok(doc),
            EngineState::Unloaded => Err(SummaryError::NotLoaded),
        }
    }

    /// Load `text`, replacing any previous document.
    ///
    /// On failure the engine keeps whatever it held before.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let document = LoadedDocument::build(text, &self.config, &self.stopwords)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = document.len(),
            tokens = document.frequencies().len(),
            edges = document.graph().edge_count(),
            "loaded document"
        );

        self.state = EngineState::Loaded(document);
        Ok(())
    }

    /// Final rank of every sentence
    pub fn ranks(&self) -> Result<PageRankResult> {
        let document = self.document()?;
        trace_stage!("propagate");
        self.propagator().run(document.graph(), &document.saliency())
    }

    /// Summarize with `choose_k` deciding how many sentences to keep.
    ///
    /// The count is clamped to `0..=N`; the result joins the chosen
    /// sentences verbatim with single spaces in document order.
    pub fn summarize<F>(&self, choose_k: F) -> Result<String>
    where
        F: FnOnce(&[Sentence]) -> i64,
    {
        Ok(self.summarize_detailed(choose_k)?.text())
    }

    /// Summarize keeping at most `k` sentences
    pub fn summarize_top(&self, k: usize) -> Result<String> {
        self.summarize(|_| i64::try_from(k).unwrap_or(i64::MAX))
    }

    /// Like [`summarize`](Self::summarize), returning the chosen sentences
    /// with their ranks.
    pub fn summarize_detailed<F>(&self, choose_k: F) -> Result<Summary>
    where
        F: FnOnce(&[Sentence]) -> i64,
    {
        let document = self.document()?;
        let ranks = self.ranks()?;
        Ok(self.finish(document, &ranks, choose_k))
    }

    /// Like [`summarize_detailed`](Self::summarize_detailed), checking
    /// `token` between propagation steps.
    pub fn summarize_cancellable<F>(&self, choose_k: F, token: &CancellationToken) -> Result<Summary>
    where
        F: FnOnce(&[Sentence]) -> i64,
    {
        let document = self.document()?;
        let ranks = {
            trace_stage!("propagate");
            self.propagator()
                .run_cancellable(document.graph(), &document.saliency(), token)?
        };
        Ok(self.finish(document, &ranks, choose_k))
    }

    fn finish<F>(&self, document: &LoadedDocument, ranks: &PageRankResult, choose_k: F) -> Summary
    where
        F: FnOnce(&[Sentence]) -> i64,
    {
        trace_stage!("select");
        let k = selector::clamp_k(choose_k(document.sentences()), document.len());
        let summary = selector::select(document.sentences(), &ranks.scores, k, ranks.iterations);

        #[cfg(feature = "tracing")]
        tracing::debug!(k, selected = ?summary.indices(), "selected sentences");

        summary
    }

    fn propagator(&self) -> SaliencyPageRank {
        SaliencyPageRank::new()
            .with_alpha(self.config.alpha)
            .with_iterations(self.config.iterations)
    }
}
