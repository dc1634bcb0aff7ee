//! Property-based tests for the analysis engine
//!
//! Checks the determinism and bound guarantees that downstream persistence
//! and UI rendering depend on.

use analysis_engine::{AnalysisConfig, AnalysisEngine};
use proptest::prelude::*;

/// Word-like fragments with occasional punctuation, joined into prose
fn arbitrary_text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Za-z]{1,12}[.!?,]{0,1}", 0..200)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn analysis_is_deterministic(text in arbitrary_text()) {
        let engine = AnalysisEngine::new();
        let first = engine.analyze(&text);
        let second = engine.analyze(&text);

        prop_assert_eq!(first.summary, second.summary);
        prop_assert_eq!(first.key_concepts, second.key_concepts);
        prop_assert_eq!(first.highlights, second.highlights);
        prop_assert_eq!(first.words, second.words);
    }

    #[test]
    fn concepts_are_unique_and_bounded(text in arbitrary_text()) {
        let engine = AnalysisEngine::new();
        let analysis = engine.analyze(&text);

        prop_assert!(analysis.key_concepts.len() <= 12);

        let lowered: Vec<String> = analysis
            .key_concepts
            .iter()
            .map(|c| c.to_lowercase())
            .collect();
        let mut deduped = lowered.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(lowered.len(), deduped.len());
    }

    #[test]
    fn highlight_scores_never_increase(text in arbitrary_text()) {
        let engine = AnalysisEngine::new();
        let analysis = engine.analyze(&text);

        prop_assert!(analysis.highlights.len() <= 8);
        for pair in analysis.highlights.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for h in &analysis.highlights {
            prop_assert!(h.score >= 0.0);
        }
    }

    #[test]
    fn snippets_respect_the_character_bound(text in arbitrary_text()) {
        let config = AnalysisConfig { snippet_chars: 60, ..AnalysisConfig::default() };
        let engine = AnalysisEngine::with_config(config);
        let analysis = engine.analyze(&text);

        for h in &analysis.highlights {
            prop_assert!(h.snippet.chars().count() <= 60);
        }
    }

    #[test]
    fn word_sequence_matches_whitespace_split(text in arbitrary_text()) {
        let engine = AnalysisEngine::new();
        let analysis = engine.analyze(&text);
        let expected: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(analysis.words.len(), expected.len());
    }
}
