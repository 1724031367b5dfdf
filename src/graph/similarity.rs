//! Similarity metrics between token collections
//!
//! `intersection` keeps every element of the first collection that occurs
//! anywhere in the second, so duplicates produced by [`Encoding::AsIs`]
//! count more than once. `union` is always the distinct set. With duplicates
//! the two argument orders can therefore disagree, which is why the graph
//! evaluates every ordered pair.
//!
//! [`Encoding::AsIs`]: crate::types::Encoding::AsIs

use crate::types::Distance;
use rustc_hash::FxHashSet;

/// Number of elements of `a` that are members of `b`
pub fn intersection_count(a: &[String], b: &[String]) -> usize {
    let members: FxHashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter().filter(|t| members.contains(t.as_str())).count()
}

/// Number of distinct elements across `a` and `b`
pub fn union_count(a: &[String], b: &[String]) -> usize {
    a.iter()
        .chain(b.iter())
        .map(String::as_str)
        .collect::<FxHashSet<&str>>()
        .len()
}

impl Distance {
    /// Similarity of two token collections; a zero denominator yields 0.
    pub fn similarity(&self, a: &[String], b: &[String]) -> f64 {
        let denominator = match self {
            Distance::Jaccard => union_count(a, b),
            Distance::Overlap => a.len().min(b.len()),
        };
        if denominator == 0 {
            return 0.0;
        }
        intersection_count(a, b) as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_jaccard() {
        let a = toks(&["cat", "sat", "mat"]);
        let b = toks(&["cat", "ran"]);
        // 1 shared / 4 distinct
        assert!((Distance::Jaccard.similarity(&a, &b) - 0.25).abs() < 1e-12);
        assert!((Distance::Jaccard.similarity(&b, &a) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_overlap() {
        let a = toks(&["cat", "sat", "mat"]);
        let b = toks(&["cat", "ran"]);
        // 1 shared / min(3, 2)
        assert!((Distance::Overlap.similarity(&a, &b) - 0.5).abs() < 1e-12);
        assert!((Distance::Overlap.similarity(&b, &a) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_identical_sets() {
        let a = toks(&["x", "y"]);
        assert!((Distance::Jaccard.similarity(&a, &a) - 1.0).abs() < 1e-12);
        assert!((Distance::Overlap.similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint() {
        let a = toks(&["x"]);
        let b = toks(&["y"]);
        assert_eq!(Distance::Jaccard.similarity(&a, &b), 0.0);
        assert_eq!(Distance::Overlap.similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_collections_are_zero() {
        let empty: Vec<String> = Vec::new();
        let a = toks(&["x"]);
        assert_eq!(Distance::Jaccard.similarity(&empty, &empty), 0.0);
        assert_eq!(Distance::Overlap.similarity(&empty, &empty), 0.0);
        assert_eq!(Distance::Overlap.similarity(&empty, &a), 0.0);
        assert_eq!(Distance::Jaccard.similarity(&empty, &a), 0.0);
    }

    #[test]
    fn test_duplicates_inflate_intersection() {
        let a = toks(&["dog", "dog"]);
        let b = toks(&["dog"]);
        assert_eq!(intersection_count(&a, &b), 2);
        assert_eq!(intersection_count(&b, &a), 1);
        assert_eq!(union_count(&a, &b), 1);
        assert!((Distance::Jaccard.similarity(&a, &b) - 2.0).abs() < 1e-12);
        assert!((Distance::Jaccard.similarity(&b, &a) - 1.0).abs() < 1e-12);
    }
}
