//! Saliency-seeded PageRank
//!
//! Unlike textbook PageRank the starting vector is the saliency of each
//! sentence, the loop runs a fixed number of steps with no convergence test,
//! and the weight read for the contribution of `i` to `idx` is
//! `graph[idx][i]`, i.e. the target's own normalized row:
//!
//! ```text
//! incoming(idx) = Σ_{i ≠ idx} r[i] · graph[idx][i] / (N − 1)
//! r'[idx]       = alpha · incoming(idx) + (1 − alpha) / N
//! ```
//!
//! Each step reads only the previous vector.

use super::{CancellationToken, PageRankResult};
use crate::errors::{Result, SummaryError};
use crate::graph::builder::SimilarityGraph;
use rayon::prelude::*;

/// Below this many sentences each step runs sequentially
pub const PARALLEL_THRESHOLD: usize = 256;

/// Fixed-iteration rank propagation
#[derive(Debug, Clone)]
pub struct SaliencyPageRank {
    /// Weight of the propagated term (typically 0.85)
    pub alpha: f64,
    /// Number of propagation steps
    pub iterations: usize,
}

impl Default for SaliencyPageRank {
    fn default() -> Self {
        Self {
            alpha: 0.85,
            iterations: 100,
        }
    }
}

impl SaliencyPageRank {
    /// Create a new propagator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run propagation from `seed` over `graph`.
    ///
    /// With zero iterations the seed is returned unchanged. The seed must
    /// hold one score per graph node.
    pub fn run(&self, graph: &SimilarityGraph, seed: &[f64]) -> Result<PageRankResult> {
        check_seed(graph, seed)?;
        let mut scores = seed.to_vec();
        let mut next = vec![0.0; scores.len()];
        for _ in 0..self.iterations {
            self.step(graph, &scores, &mut next);
            std::mem::swap(&mut scores, &mut next);
        }
        Ok(PageRankResult::new(scores, self.iterations))
    }

    /// Same as [`run`](Self::run), but stops with
    /// [`SummaryError::Cancelled`] as soon as `token` is cancelled.
    pub fn run_cancellable(
        &self,
        graph: &SimilarityGraph,
        seed: &[f64],
        token: &CancellationToken,
    ) -> Result<PageRankResult> {
        check_seed(graph, seed)?;
        let mut scores = seed.to_vec();
        let mut next = vec![0.0; scores.len()];
        for completed in 0..self.iterations {
            if token.is_cancelled() {
                return Err(SummaryError::cancelled(completed, self.iterations));
            }
            self.step(graph, &scores, &mut next);
            std::mem::swap(&mut scores, &mut next);
        }
        Ok(PageRankResult::new(scores, self.iterations))
    }

    /// One synchronous update of every index from `prev` into `next`
    fn step(&self, graph: &SimilarityGraph, prev: &[f64], next: &mut [f64]) {
        let n = prev.len();
        let baseline = (1.0 - self.alpha) * (1.0 / n as f64);
        let update = |(idx, out): (usize, &mut f64)| {
            *out = self.alpha * incoming(graph, prev, idx) + baseline;
        };

        if n < PARALLEL_THRESHOLD {
            next.iter_mut().enumerate().for_each(update);
        } else {
            next.par_iter_mut().enumerate().for_each(update);
        }
    }
}

fn check_seed(graph: &SimilarityGraph, seed: &[f64]) -> Result<()> {
    if seed.len() != graph.len() {
        return Err(SummaryError::invalid_config(format!(
            "seed has {} scores for a graph of {} sentences",
            seed.len(),
            graph.len()
        )));
    }
    Ok(())
}

/// Weighted mass flowing into `idx`, read from row `idx`
fn incoming(graph: &SimilarityGraph, prev: &[f64], idx: usize) -> f64 {
    let peers = (prev.len() - 1) as f64;
    let row = graph.row(idx);
    let mut sum = 0.0;
    for (i, (&rank, &weight)) in prev.iter().zip(row).enumerate() {
        if i != idx {
            sum += (rank * weight) / peers;
        }
    }
    sum
}
