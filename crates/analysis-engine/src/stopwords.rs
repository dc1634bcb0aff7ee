//! Stop-word table used to filter function words out of concept extraction

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Common English function words, excluded from concept ranking
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one", "our",
    "out", "his", "has", "had", "how", "man", "new", "now", "old", "see", "two", "way", "who",
    "did", "get", "may", "say", "she", "use", "that", "this", "with", "have", "from", "they",
    "will", "would", "there", "their", "what", "about", "which", "when", "make", "like", "time",
    "just", "know", "take", "into", "your", "some", "could", "them", "than", "then", "these",
    "also", "after", "most", "other", "many", "such", "over", "only", "been", "were", "more",
    "very", "where", "much", "should", "each", "between", "because", "through", "during",
    "before", "under", "while", "does", "here", "both", "those", "being", "its", "it's",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Check whether a normalized (lowercase) key is a stop word
pub fn is_stop_word(key: &str) -> bool {
    STOP_WORD_SET.contains(key)
}
