#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sentence {
    pub text: String,
    pub start_offset: usize, // Byte offset in the source text
    pub end_offset: usize,   // End byte offset (exclusive)
    pub word_count: usize,
    pub position: usize, // Ordinal among kept sentences, 0-based
}

/// A scored excerpt surfaced to the user as a notable passage.
///
/// Scores are comparable only within a single analysis run; they are not
/// normalized probabilities.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    pub snippet: String,
    pub score: f64,
}

/// Result of analyzing one document's extracted text.
///
/// `words` is the ordered token sequence the scheduler partitions; index `i`
/// always refers to the same token for a given input text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Analysis {
    pub summary: String,
    pub key_concepts: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub words: Vec<String>,
}

impl Analysis {
    /// Degenerate result for input with no extractable words.
    pub fn empty() -> Self {
        Self {
            summary: String::new(),
            key_concepts: Vec::new(),
            highlights: Vec::new(),
            words: Vec::new(),
        }
    }
}
