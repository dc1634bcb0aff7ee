//! Sentence scoring and highlight selection
//!
//! A sentence's score combines coverage of the document's high-frequency
//! terms (normalized by sentence length so long sentences win on density,
//! not volume) with a small positional bonus for earlier sentences, since
//! study material tends to front-load definitions.

use crate::concepts::normalize_key;
use std::cmp::Ordering;
use std::collections::HashSet;
use study_types::{Highlight, Sentence};

/// Maximum positional bonus, decaying linearly to zero across the document.
/// Small enough that term coverage dominates the ranking.
const POSITION_BONUS: f64 = 0.4;

/// Score every sentence against the document's top terms.
///
/// `top_terms` are normalized keys from the concept ranking. The score is a
/// pure function of sentence content and position; repeated runs over the
/// same input produce identical values.
pub fn score_sentences(sentences: &[Sentence], top_terms: &[String]) -> Vec<f64> {
    let term_set: HashSet<&str> = top_terms.iter().map(String::as_str).collect();
    let total = sentences.len();

    sentences
        .iter()
        .map(|sentence| {
            let distinct_hits: HashSet<String> = sentence
                .text
                .split_whitespace()
                .map(normalize_key)
                .filter(|key| term_set.contains(key.as_str()))
                .collect();

            let coverage = distinct_hits.len() as f64 / sentence.word_count.max(1) as f64;
            let bonus = POSITION_BONUS * (1.0 - sentence.position as f64 / total.max(1) as f64);
            coverage + bonus
        })
        .collect()
}

/// Select up to `max_highlights` sentences by descending score.
///
/// Exact ties prefer the earlier sentence. Snippets are bounded to
/// `snippet_chars`, truncated at a word boundary and never mid-word.
pub fn select_highlights(
    sentences: &[Sentence],
    scores: &[f64],
    max_highlights: usize,
    snippet_chars: usize,
) -> Vec<Highlight> {
    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    order
        .into_iter()
        .take(max_highlights)
        .map(|i| Highlight {
            snippet: truncate_at_word_boundary(&sentences[i].text, snippet_chars),
            score: scores[i],
        })
        .collect()
}

/// Truncate text to at most `max_chars` characters at a word boundary.
pub fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let needed = if used == 0 { word_chars } else { word_chars + 1 };
        if used + needed > max_chars {
            break;
        }
        if used > 0 {
            result.push(' ');
        }
        result.push_str(word);
        used += needed;
    }

    if result.is_empty() {
        // Single word longer than the bound; fall back to a hard cut
        return text.chars().take(max_chars).collect();
    }
    result
}
