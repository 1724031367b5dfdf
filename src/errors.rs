//! Error types for sentence_textrank
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Main error type for sentence_textrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// The text contained no terminal-punctuation run, so no sentence was found
    #[error("No sentences found in the content")]
    NoSentencesFound,

    /// No text could be extracted from the content source
    #[error("Empty content: {message}")]
    EmptyContent { message: String },

    /// `summarize` was called before a successful `load`
    #[error("Engine has no loaded document")]
    NotLoaded,

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Rank propagation was cancelled between iterations
    #[error("Cancelled after {completed} of {requested} iterations")]
    Cancelled { completed: usize, requested: usize },

    /// A transport message named an action the service does not handle
    #[error("Unknown action: {action}")]
    UnknownAction { action: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummaryError {
    /// Create an empty content error
    pub fn empty_content(message: impl Into<String>) -> Self {
        Self::EmptyContent {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a cancellation error
    pub fn cancelled(completed: usize, requested: usize) -> Self {
        Self::Cancelled {
            completed,
            requested,
        }
    }

    /// Create an unknown action error
    pub fn unknown_action(action: impl Into<String>) -> Self {
        Self::UnknownAction {
            action: action.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Short human-readable reason surfaced to presentation layers.
    ///
    /// Only the two content failures have a fixed wording; everything else
    /// falls back to the `Display` text.
    pub fn reason(&self) -> String {
        match self {
            Self::EmptyContent { .. } => "Unable to extract content".to_string(),
            Self::NoSentencesFound => "No sentences found".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
