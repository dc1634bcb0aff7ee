//! Prose summary composition from top-scored sentences

use std::cmp::Ordering;
use study_types::Sentence;

/// Compose a short summary from the highest-scoring sentences.
///
/// The top `max_sentences` by score are reordered into document order so the
/// result reads coherently, then joined with single spaces. Trailing
/// sentences that would push the result past `max_chars` are dropped whole;
/// a sentence is never cut mid-way. The first selected sentence is always
/// kept so any document with at least one sentence gets a summary.
pub fn summarize(
    sentences: &[Sentence],
    scores: &[f64],
    max_sentences: usize,
    max_chars: usize,
) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut selected: Vec<usize> = order.into_iter().take(max_sentences).collect();
    selected.sort_unstable();

    let mut summary = String::new();
    let mut used = 0;
    for index in selected {
        let text = &sentences[index].text;
        let chars = text.chars().count();
        let needed = if used == 0 { chars } else { chars + 1 };
        if used > 0 && used + needed > max_chars {
            break;
        }
        if used > 0 {
            summary.push(' ');
        }
        summary.push_str(text);
        used += needed;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sentence(text: &str, position: usize) -> Sentence {
        Sentence {
            text: text.to_string(),
            start_offset: 0,
            end_offset: text.len(),
            word_count: text.split_whitespace().count(),
            position,
        }
    }

    #[test]
    fn test_summary_reads_in_document_order() {
        let sentences = vec![
            sentence("First point made early.", 0),
            sentence("Unrelated filler in the middle.", 1),
            sentence("Second point made later.", 2),
        ];
        // Later sentence scores highest; summary must still read in order
        let scores = vec![0.5, 0.1, 0.9];
        let summary = summarize(&sentences, &scores, 2, 600);
        assert_eq!(summary, "First point made early. Second point made later.");
    }

    #[test]
    fn test_bound_drops_whole_trailing_sentences() {
        let sentences = vec![
            sentence("A short opening sentence.", 0),
            sentence("A second sentence that will not fit inside the bound.", 1),
        ];
        let scores = vec![1.0, 0.9];
        let summary = summarize(&sentences, &scores, 2, 30);
        assert_eq!(summary, "A short opening sentence.");
    }

    #[test]
    fn test_single_sentence_document_still_summarized() {
        let sentences = vec![sentence("Only one sentence exists in this document.", 0)];
        let scores = vec![0.3];
        let summary = summarize(&sentences, &scores, 4, 600);
        assert_eq!(summary, "Only one sentence exists in this document.");
    }

    #[test]
    fn test_no_sentences_yields_empty_summary() {
        assert_eq!(summarize(&[], &[], 4, 600), "");
    }

    #[test]
    fn test_sentence_count_bound_respected() {
        let sentences: Vec<Sentence> = (0..10)
            .map(|i| sentence(&format!("Sentence number {} in sequence.", i), i))
            .collect();
        let scores: Vec<f64> = (0..10).map(|i| 1.0 - i as f64 * 0.05).collect();
        let summary = summarize(&sentences, &scores, 3, 600);
        assert_eq!(summary.matches("Sentence number").count(), 3);
    }
}
