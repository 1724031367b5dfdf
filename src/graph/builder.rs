//! Sentence similarity graph
//!
//! A dense N×N matrix, stored row-major. Entry `(i, j)` is the similarity
//! of sentence `i` to sentence `j` under the configured metric, the diagonal
//! is zero, and after construction every row either sums to one or is
//! entirely zero (an isolated sentence).

use crate::types::Distance;
use rayon::prelude::*;

/// Below this many sentences rows are computed sequentially
pub const PARALLEL_THRESHOLD: usize = 64;

/// Row-normalized sentence similarity graph
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityGraph {
    /// Number of sentences (rows and columns)
    n: usize,
    /// Row-major weights, `n * n` entries
    weights: Vec<f64>,
}

impl SimilarityGraph {
    /// Build and row-normalize the graph for pre-encoded sentences.
    pub fn build(encoded: &[Vec<String>], distance: Distance) -> Self {
        let n = encoded.len();
        let mut weights = vec![0.0; n * n];
        if n == 0 {
            return Self { n, weights };
        }

        let fill_row = |(i, row): (usize, &mut [f64])| {
            for (j, cell) in row.iter_mut().enumerate() {
                if i != j {
                    *cell = distance.similarity(&encoded[i], &encoded[j]);
                }
            }
            normalize_row(row);
        };

        if n < PARALLEL_THRESHOLD {
            weights.chunks_mut(n).enumerate().for_each(fill_row);
        } else {
            weights.par_chunks_mut(n).enumerate().for_each(fill_row);
        }

        Self { n, weights }
    }

    /// Build a graph directly from raw rows, normalizing each one.
    ///
    /// The diagonal is cleared regardless of the input.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (i, mut row) in rows.into_iter().enumerate() {
            row.resize(n, 0.0);
            row[i] = 0.0;
            normalize_row(&mut row);
            weights.extend(row);
        }
        Self { n, weights }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the graph has no sentences
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of row `i`, column `j`
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// All weights of row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics, so an empty graph yields nothing
        self.weights.chunks(self.n.max(1))
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// A sentence with no similarity to any peer
    pub fn is_isolated(&self, i: usize) -> bool {
        self.row(i).iter().all(|&w| w == 0.0)
    }

    /// Count of non-zero entries
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }
}

/// Divide a row by its sum; an all-zero row is left untouched.
fn normalize_row(row: &mut [f64]) {
    let sum: f64 = row.iter().sum();
    if sum > 0.0 {
        for w in row.iter_mut() {
            *w /= sum;
        }
    }
}
