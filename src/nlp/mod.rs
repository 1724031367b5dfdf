//! NLP utilities
//!
//! Sentence segmentation, stopword filtering and token encodings.

pub mod encoder;
pub mod stopwords;
pub mod tokenizer;
