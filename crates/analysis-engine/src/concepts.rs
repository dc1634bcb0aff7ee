//! Frequency-based key concept extraction
//!
//! Concepts are ranked by raw frequency with ties broken by first
//! occurrence, which keeps output deterministic and favors terms introduced
//! early in the document. This is intentionally a transparent heuristic, not
//! a statistical model.

use crate::stopwords::is_stop_word;
use std::collections::HashMap;

/// Normalize a surface token to its comparison key: lowercase with
/// surrounding punctuation stripped.
pub fn normalize_key(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Whether a normalized key qualifies for concept ranking. Keys with no
/// alphabetic character (page numbers, decimals like "3.5", figures like
/// "1,000") never qualify.
fn is_candidate(key: &str) -> bool {
    key.chars().count() >= 3 && key.chars().any(char::is_alphabetic) && !is_stop_word(key)
}

/// Count and rank qualifying keys across the whole word sequence.
///
/// Returns `(key, frequency)` pairs ordered by frequency descending, then by
/// first-occurrence index ascending. The ordering never consults hash-map
/// iteration order: keys are collected in first-occurrence order and sorted
/// on `(frequency, first_index)`, which is a total order.
pub fn ranked_terms(words: &[String]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for word in words {
        let key = normalize_key(word);
        if !is_candidate(&key) {
            continue;
        }
        match counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                counts.insert(key.clone(), 1);
                first_seen.push(key);
            }
        }
    }

    let mut ranked: Vec<(usize, String, usize)> = first_seen
        .into_iter()
        .enumerate()
        .map(|(first_index, key)| {
            let count = counts[&key];
            (first_index, key, count)
        })
        .collect();

    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    ranked.into_iter().map(|(_, key, count)| (key, count)).collect()
}

/// Extract up to `max_concepts` key concepts, most salient first.
///
/// Each concept is rendered once in title case; the case-insensitive
/// deduplication falls out of ranking normalized keys.
pub fn extract_concepts(words: &[String], max_concepts: usize) -> Vec<String> {
    ranked_terms(words)
        .into_iter()
        .take(max_concepts)
        .map(|(key, _)| render_concept(&key))
        .collect()
}

/// Render a normalized key for display: title case, one entry per key
pub fn render_concept(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize_key("Mitosis,"), "mitosis");
        assert_eq!(normalize_key("(DNA)"), "dna");
        assert_eq!(normalize_key("cell."), "cell");
    }

    #[test]
    fn test_frequency_ranks_first() {
        let w = words("enzyme substrate enzyme reaction enzyme substrate");
        let concepts = extract_concepts(&w, 12);
        assert_eq!(concepts, vec!["Enzyme", "Substrate", "Reaction"]);
    }

    #[test]
    fn test_tie_broken_by_first_occurrence() {
        let w = words("osmosis diffusion osmosis diffusion");
        let concepts = extract_concepts(&w, 12);
        assert_eq!(concepts, vec!["Osmosis", "Diffusion"]);
    }

    #[test]
    fn test_stop_words_numbers_and_short_tokens_excluded() {
        let w = words("the and 1944 at 42 DNA polymerase polymerase");
        let concepts = extract_concepts(&w, 12);
        assert_eq!(concepts, vec!["Polymerase", "Dna"]);
    }

    #[test]
    fn test_numeric_tokens_with_inner_punctuation_excluded() {
        // Inner punctuation survives normalization, so "3.5" and "1,000"
        // pass the length check; they still carry no alphabetic character.
        let w = words("3.5 1,000 2024-01 osmosis osmosis");
        let concepts = extract_concepts(&w, 12);
        assert_eq!(concepts, vec!["Osmosis"]);
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let w = words("Neuron neuron NEURON synapse");
        let concepts = extract_concepts(&w, 12);
        assert_eq!(concepts, vec!["Neuron", "Synapse"]);
    }

    #[test]
    fn test_bound_respected() {
        let w = words("alpha beta gamma delta epsilon zeta");
        let concepts = extract_concepts(&w, 3);
        assert_eq!(concepts.len(), 3);
    }

    #[test]
    fn test_heavily_repeated_term_outranks_rarer_ones() {
        let mut text = String::from("introduction covers several topics briefly today ");
        for _ in 0..20 {
            text.push_str("photosynthesis ");
        }
        let concepts = extract_concepts(&words(&text), 12);
        assert_eq!(concepts[0], "Photosynthesis");
    }
}
