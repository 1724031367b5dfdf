//! Rank propagation
//!
//! Saliency-seeded power iteration over the sentence similarity graph.

pub mod propagation;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a propagation run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Rank of each sentence (indexed by original position)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
}

impl PageRankResult {
    /// Create a new result
    pub fn new(scores: Vec<f64>, iterations: usize) -> Self {
        Self { scores, iterations }
    }

    /// Get the score for a specific sentence
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }
}

/// Shared flag checked between propagation iterations.
///
/// Clones share the same flag, so one can be handed to another thread and
/// cancelled from there while the engine runs.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
