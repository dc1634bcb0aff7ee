//! Word and sentence segmentation over extracted document text
//!
//! Splitting is deterministic: the same input always yields the same word
//! and sentence sequences. Words keep their original surface form so that
//! excerpts rebuilt from the sequence stay readable; normalization for
//! scoring happens separately in the concept extractor.

use lazy_static::lazy_static;
use regex::Regex;
use study_types::Sentence;

lazy_static! {
    // Terminal punctuation followed by whitespace or end of text
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]+(?:\s+|$)").unwrap();
}

/// Split text into its ordered word sequence.
///
/// Tokens are whitespace-delimited runs with original casing and punctuation
/// preserved. Empty input yields an empty sequence.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Split text into sentences, dropping candidates shorter than `min_words`.
///
/// Short candidates are treated as noise (headers, page numbers, stray
/// fragments from PDF extraction). Offsets index into the original text.
pub fn split_sentences(text: &str, min_words: usize) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut cursor = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        push_candidate(&mut sentences, text, cursor, boundary.end(), min_words);
        cursor = boundary.end();
    }

    // Trailing text without terminal punctuation still counts as a candidate
    if cursor < text.len() {
        push_candidate(&mut sentences, text, cursor, text.len(), min_words);
    }

    sentences
}

/// Tokenize text into both sequences in one call.
pub fn tokenize(text: &str, min_sentence_words: usize) -> (Vec<String>, Vec<Sentence>) {
    (split_words(text), split_sentences(text, min_sentence_words))
}

fn push_candidate(
    sentences: &mut Vec<Sentence>,
    text: &str,
    start: usize,
    end: usize,
    min_words: usize,
) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    let word_count = trimmed.split_whitespace().count();
    if word_count < min_words {
        return;
    }

    let leading = raw.len() - raw.trim_start().len();
    let position = sentences.len();
    sentences.push(Sentence {
        text: trimmed.to_string(),
        start_offset: start + leading,
        end_offset: start + leading + trimmed.len(),
        word_count,
        position,
    });
}
