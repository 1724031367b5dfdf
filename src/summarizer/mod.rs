//! Summarization components
//!
//! The [`engine::Engine`] lifecycle and the top-k sentence selector it
//! finishes with.

pub mod engine;
pub mod selector;
