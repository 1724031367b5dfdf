//! Sentence graph construction
//!
//! Pairwise similarity metrics and the row-normalized graph built from them.

pub mod builder;
pub mod similarity;
