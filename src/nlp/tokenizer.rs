//! Punctuation-driven sentence segmentation
//!
//! A sentence is a maximal run of characters other than `.`, `!` and `?`
//! followed by one or more of those terminal characters. Nothing else is
//! interpreted: abbreviations, quotes and newlines are ordinary characters,
//! and whatever trails the last terminal run is dropped.

use crate::errors::{Result, SummaryError};
use crate::types::Sentence;

/// Characters that close a sentence
pub const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Check whether a character closes a sentence
#[inline]
pub fn is_terminal(c: char) -> bool {
    TERMINALS.contains(&c)
}

/// Byte spans `(start, end)` of every sentence in `text`.
///
/// A terminal run that is not preceded by at least one non-terminal
/// character (for example the `...` opening `"...Hello."`) belongs to no
/// sentence and is skipped.
pub fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminal(c) {
            run_start.get_or_insert(idx);
            continue;
        }

        // Swallow the whole terminal run.
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        if let Some(start) = run_start.take() {
            spans.push((start, end));
        }
    }

    spans
}

/// Split text into verbatim sentence strings.
///
/// Fails with [`SummaryError::NoSentencesFound`] when the text holds no
/// terminal punctuation (including empty text).
pub fn segment(text: &str) -> Result<Vec<String>> {
    let spans = sentence_spans(text);
    if spans.is_empty() {
        return Err(SummaryError::NoSentencesFound);
    }
    Ok(spans
        .into_iter()
        .map(|(start, end)| text[start..end].to_string())
        .collect())
}

/// Segment text into [`Sentence`] records carrying offsets and indices.
pub fn segment_sentences(text: &str) -> Result<Vec<Sentence>> {
    let spans = sentence_spans(text);
    if spans.is_empty() {
        return Err(SummaryError::NoSentencesFound);
    }
    Ok(spans
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| Sentence::new(&text[start..end], start, end, index))
        .collect())
}

/// Raw tokens of a sentence: split on the space character only.
///
/// Leading, trailing or doubled spaces produce empty tokens, and other
/// whitespace (tabs, newlines) stays inside the token it touches.
pub fn split_tokens(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let sentences = segment("The cat sat. A dog ran fast. The cat and dog played.").unwrap();
        assert_eq!(
            sentences,
            vec!["The cat sat.", " A dog ran fast.", " The cat and dog played."]
        );
    }

    #[test]
    fn test_terminal_run_kept_whole() {
        let sentences = segment("Really?! Yes... Ok!").unwrap();
        assert_eq!(sentences, vec!["Really?!", " Yes...", " Ok!"]);
    }

    #[test]
    fn test_trailing_content_discarded() {
        let sentences = segment("First one. Second one! and a dangling tail").unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences.iter().all(|s| !s.contains("dangling")));
    }

    #[test]
    fn test_leading_terminals_skipped() {
        let sentences = segment("...Hello there. ?").unwrap();
        assert_eq!(sentences, vec!["Hello there.", " ?"]);
    }

    #[test]
    fn test_newlines_are_ordinary() {
        let sentences = segment("Line one\ncontinues. Next.").unwrap();
        assert_eq!(sentences, vec!["Line one\ncontinues.", " Next."]);
    }

    #[test]
    fn test_no_sentences() {
        assert_eq!(
            segment("no punctuation here"),
            Err(SummaryError::NoSentencesFound)
        );
        assert_eq!(segment(""), Err(SummaryError::NoSentencesFound));
        assert_eq!(segment("..."), Err(SummaryError::NoSentencesFound));
    }

    #[test]
    fn test_sentence_records() {
        let text = "Café au lait. Ça va?";
        let sentences = segment_sentences(text).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(&text[sentences[1].start..sentences[1].end], " Ça va?");
        assert_eq!(sentences[1].end, text.len());
    }

    #[test]
    fn test_split_tokens_keeps_empty_tokens() {
        let tokens: Vec<_> = split_tokens(" A  dog.").collect();
        assert_eq!(tokens, vec!["", "A", "", "dog."]);
        let tokens: Vec<_> = split_tokens("").collect();
        assert_eq!(tokens, vec![""]);
    }
}
