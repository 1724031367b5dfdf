//! Top-k sentence selection
//!
//! Sentences are ordered by rank descending with the original index as the
//! ascending tie-break, the first `k` are kept, and the kept ones are put
//! back in document order.

use crate::types::Sentence;

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// Original position in the document
    pub index: usize,
    /// Verbatim sentence text
    pub text: String,
    /// Final rank
    pub rank: f64,
}

/// Selected sentences in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// The chosen sentences, ascending by index
    pub sentences: Vec<SelectedSentence>,
    /// Propagation steps run to produce the ranks
    pub iterations: usize,
}

impl Summary {
    /// The summary string: verbatim sentences joined by a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Original indices of the chosen sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    /// Number of chosen sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was chosen
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Clamp a requested sentence count into `0..=n`
pub fn clamp_k(requested: i64, n: usize) -> usize {
    requested.clamp(0, n as i64) as usize
}

/// Indices sorted by score descending, index ascending on ties
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order
}

/// Indices of the `k` best-ranked sentences, in document order
pub fn select_indices(scores: &[f64], k: usize) -> Vec<usize> {
    let mut chosen: Vec<usize> = rank_order(scores).into_iter().take(k).collect();
    chosen.sort_unstable();
    chosen
}

/// Build a [`Summary`] from ranked sentences
pub fn select(sentences: &[Sentence], scores: &[f64], k: usize, iterations: usize) -> Summary {
    let sentences = select_indices(scores, k)
        .into_iter()
        .map(|index| SelectedSentence {
            index,
            text: sentences[index].text.clone(),
            rank: scores[index],
        })
        .collect();
    Summary {
        sentences,
        iterations,
    }
}
