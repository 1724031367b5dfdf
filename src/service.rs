//! Summarize-on-request service
//!
//! The boundary between a host application and the engine: a content source
//! supplies text fragments, a transport delivers a `summarizePage` request,
//! and the answer is either the summary or a short reason string shown
//! verbatim by the presentation layer.
//!
//! Message shapes on the wire:
//!
//! ```json
//! { "action": "summarizePage" }
//! { "summary": "First sentence. Third sentence." }
//! ```

use crate::errors::{Result, SummaryError};
use crate::summarizer::engine::Engine;
use crate::types::EngineConfig;
use serde::{Deserialize, Serialize};

/// Action name of a summarize request
pub const SUMMARIZE_ACTION: &str = "summarizePage";

/// Text shown by presentation layers while a summary is computed
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Upper bound on summary length used when none is configured
pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// Anything that can hand over the text fragments of a document
pub trait ContentSource {
    /// Text of each structural element, in document order
    fn fragments(&self) -> Vec<String>;
}

impl ContentSource for [String] {
    fn fragments(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl ContentSource for Vec<String> {
    fn fragments(&self) -> Vec<String> {
        self.clone()
    }
}

impl ContentSource for [&str] {
    fn fragments(&self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl ContentSource for str {
    fn fragments(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

/// Concatenate every fragment, each prefixed with a single space
pub fn collect_content<C: ContentSource + ?Sized>(source: &C) -> String {
    let mut content = String::new();
    for fragment in source.fragments() {
        content.push(' ');
        content.push_str(&fragment);
    }
    content
}

/// Request sent by a trigger to the component holding the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub action: String,
}

impl SummarizeRequest {
    /// The standard summarize request
    pub fn summarize_page() -> Self {
        Self {
            action: SUMMARIZE_ACTION.to_string(),
        }
    }
}

impl Default for SummarizeRequest {
    fn default() -> Self {
        Self::summarize_page()
    }
}

/// Answer carrying either the summary or a failure reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// How the service configures each summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeOptions {
    /// Engine configuration
    pub engine: EngineConfig,
    /// Summaries keep at most this many sentences
    pub max_sentences: usize,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl SummarizeOptions {
    /// Builder method: set engine configuration
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Builder method: set the sentence cap
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }
}

/// Summarize raw content, failing on empty content or missing sentences.
pub fn summarize_content(content: &str, options: &SummarizeOptions) -> Result<String> {
    if content.trim().is_empty() {
        return Err(SummaryError::empty_content("no text found in the content"));
    }

    let mut engine = Engine::new(options.engine.clone())?;
    engine.load(content)?;
    let cap = options.max_sentences;
    engine.summarize(|sentences| i64::try_from(cap.min(sentences.len())).unwrap_or(i64::MAX))
}

/// Summarize content into a response, mapping failures to reason strings.
pub fn summarize_page(content: &str, options: &SummarizeOptions) -> SummarizeResponse {
    let summary = match summarize_content(content, options) {
        Ok(summary) => summary,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "summarization failed");
            err.reason()
        }
    };
    SummarizeResponse { summary }
}

/// Answer a JSON request with a JSON response.
///
/// Malformed JSON and actions other than `summarizePage` are errors; content
/// failures are reported inside the response.
pub fn handle_message<C: ContentSource + ?Sized>(
    message: &str,
    source: &C,
    options: &SummarizeOptions,
) -> Result<String> {
    let request: SummarizeRequest = serde_json::from_str(message)?;
    if request.action != SUMMARIZE_ACTION {
        return Err(SummaryError::unknown_action(request.action));
    }

    let content = collect_content(source);
    let response = summarize_page(&content, options);
    Ok(serde_json::to_string(&response)?)
}
