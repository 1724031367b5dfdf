//! Native Python interface
//!
//! Python classes wrapping the engine for callers that already hold the
//! page text.

use crate::errors::SummaryError;
use crate::nlp::stopwords::StopwordFilter;
use crate::service::{self, SummarizeOptions};
use crate::summarizer::engine::Engine;
use crate::summarizer::selector::{SelectedSentence, Summary};
use crate::types::{Distance, DocumentFrequency, Encoding, EngineConfig};
use pyo3::prelude::*;

fn to_py_err(err: SummaryError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// A sentence chosen for a summary
#[pyclass(name = "SelectedSentence")]
#[derive(Clone)]
pub struct PySelectedSentence {
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub rank: f64,
}

#[pymethods]
impl PySelectedSentence {
    fn __repr__(&self) -> String {
        format!(
            "SelectedSentence(index={}, rank={:.4}, text={:?})",
            self.index, self.rank, self.text
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<SelectedSentence> for PySelectedSentence {
    fn from(s: SelectedSentence) -> Self {
        Self {
            index: s.index,
            text: s.text,
            rank: s.rank,
        }
    }
}

/// Result of a summarization
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub sentences: Vec<PySelectedSentence>,
    #[pyo3(get)]
    pub iterations: usize,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(sentences={}, iterations={})",
            self.sentences.len(),
            self.iterations
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn __len__(&self) -> usize {
        self.sentences.len()
    }

    fn __getitem__(&self, idx: usize) -> PyResult<PySelectedSentence> {
        self.sentences
            .get(idx)
            .cloned()
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("index out of range"))
    }
}

impl From<Summary> for PySummary {
    fn from(summary: Summary) -> Self {
        Self {
            text: summary.text(),
            iterations: summary.iterations,
            sentences: summary.sentences.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get the built-in stopword list.
#[pyfunction]
pub fn get_stopwords() -> PyResult<Vec<String>> {
    Ok(StopwordFilter::built_in_list())
}

/// Extractive summarizer holding one loaded text at a time
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Engine,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (
        encoding="as_is",
        distance="jaccard",
        alpha=0.85,
        iterations=100,
        exact_token_frequency=false
    ))]
    fn new(
        encoding: &str,
        distance: &str,
        alpha: f64,
        iterations: usize,
        exact_token_frequency: bool,
    ) -> PyResult<Self> {
        let document_frequency = if exact_token_frequency {
            DocumentFrequency::ExactToken
        } else {
            DocumentFrequency::Substring
        };
        let config = EngineConfig::default()
            .with_encoding(encoding.parse::<Encoding>().map_err(to_py_err)?)
            .with_distance(distance.parse::<Distance>().map_err(to_py_err)?)
            .with_alpha(alpha)
            .with_iterations(iterations)
            .with_document_frequency(document_frequency);
        let inner = Engine::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Load text, replacing any previously loaded text
    fn load(&mut self, text: &str) -> PyResult<()> {
        self.inner.load(text).map_err(to_py_err)
    }

    /// Summarize keeping the `k` best-ranked sentences
    #[pyo3(signature = (k=5))]
    fn summarize(&self, k: i64) -> PyResult<PySummary> {
        self.inner
            .summarize_detailed(|_| k)
            .map(Into::into)
            .map_err(to_py_err)
    }

    /// Final rank of every sentence
    fn ranks(&self) -> PyResult<Vec<f64>> {
        self.inner
            .ranks()
            .map(|result| result.scores)
            .map_err(to_py_err)
    }

    /// Loaded sentences, verbatim
    fn sentences(&self) -> PyResult<Vec<String>> {
        let document = self.inner.document().map_err(to_py_err)?;
        Ok(document.sentences().iter().map(|s| s.text.clone()).collect())
    }

    #[getter]
    fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Summarizer(encoding='{}', distance='{}', alpha={}, iterations={})",
            config.encoding.as_str(),
            config.distance.as_str(),
            config.alpha,
            config.iterations
        )
    }
}

/// Summarize page content with the default settings, returning either the
/// summary or a failure reason.
#[pyfunction]
#[pyo3(signature = (content, max_sentences=5))]
pub fn summarize_page(content: &str, max_sentences: usize) -> String {
    let options = SummarizeOptions::default().with_max_sentences(max_sentences);
    service::summarize_page(content, &options).summary
}
