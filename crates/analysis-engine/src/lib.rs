//! Document analysis engine
//!
//! Turns the raw text extracted from an uploaded document into an
//! [`Analysis`]: a short summary, ranked highlight excerpts, key concepts,
//! and the ordered word sequence that the study planner partitions into
//! daily goals.
//!
//! The engine is a pure, synchronous computation over its input. It holds no
//! state across calls, so concurrent invocations are independent, and
//! repeated calls over the same text produce byte-identical output.

pub mod concepts;
pub mod highlights;
pub mod stopwords;
pub mod summary;
pub mod tokenizer;

use study_types::Analysis;

/// Bounds and thresholds for one analysis run.
///
/// Passed at construction so tests can vary limits per case; there is no
/// ambient global configuration.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Maximum number of key concepts returned
    pub max_concepts: usize,
    /// Maximum number of highlights returned
    pub max_highlights: usize,
    /// Character bound for highlight snippets
    pub snippet_chars: usize,
    /// Character bound for the summary
    pub summary_chars: usize,
    /// How many top sentences feed the summary
    pub summary_sentences: usize,
    /// Sentence candidates with fewer words are dropped as noise
    pub min_sentence_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_concepts: 12,
            max_highlights: 8,
            snippet_chars: 240,
            summary_chars: 600,
            summary_sentences: 4,
            min_sentence_words: 3,
        }
    }
}

/// AnalysisEngine entry point
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze extracted document text.
    ///
    /// Tokenizes once and derives concepts, highlights, and the summary from
    /// that single tokenization. Input with no extractable words yields
    /// [`Analysis::empty`] rather than an error; rejecting thin documents is
    /// the caller's policy.
    pub fn analyze(&self, text: &str) -> Analysis {
        let (words, sentences) = tokenizer::tokenize(text, self.config.min_sentence_words);
        if words.is_empty() {
            return Analysis::empty();
        }

        let top_terms: Vec<String> = concepts::ranked_terms(&words)
            .into_iter()
            .take(self.config.max_concepts)
            .map(|(key, _)| key)
            .collect();
        let key_concepts = concepts::extract_concepts(&words, self.config.max_concepts);

        let scores = highlights::score_sentences(&sentences, &top_terms);
        let highlights = highlights::select_highlights(
            &sentences,
            &scores,
            self.config.max_highlights,
            self.config.snippet_chars,
        );
        let summary = summary::summarize(
            &sentences,
            &scores,
            self.config.summary_sentences,
            self.config.summary_chars,
        );

        Analysis {
            summary,
            key_concepts,
            highlights,
            words,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
