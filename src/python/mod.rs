//! Python bindings via PyO3
//!
//! This module provides the Python interface for sentence_textrank.

pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("LOADING_PLACEHOLDER", crate::service::LOADING_PLACEHOLDER)?;

    m.add_class::<native::PySelectedSentence>()?;
    m.add_class::<native::PySummary>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::get_stopwords, m)?)?;
    m.add_function(wrap_pyfunction!(native::summarize_page, m)?)?;

    Ok(())
}
