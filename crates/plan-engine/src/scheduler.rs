//! Word-balanced partitioning of a document into daily goals
//!
//! The remainder policy is deliberately simple and auditable: the first
//! `len % total_days` days each take one extra word, so day sizes never
//! differ by more than one across the whole plan.

use study_types::DayGoal;

/// Bounds for plan construction, immutable for the life of the scheduler
/// call (no ambient globals).
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Character bound for each day's preview excerpt
    pub excerpt_chars: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self { excerpt_chars: 200 }
    }
}

/// Build a day-by-day plan over the word sequence with default bounds.
///
/// `total_days` below 1 is clamped to 1: a deadline already in the past
/// still yields a usable single-day plan instead of an error. The returned
/// goals always number exactly `max(total_days, 1)`, cover `[0, len)` with
/// contiguous non-overlapping ranges, and carry `word_count =
/// end_index - start_index`. When the document has fewer words than days,
/// trailing days are empty with `start_index == end_index`.
pub fn build_plan(words: &[String], total_days: u32) -> Vec<DayGoal> {
    build_plan_with(words, total_days, &PlanConfig::default())
}

/// Build a plan with explicit bounds.
pub fn build_plan_with(words: &[String], total_days: u32, config: &PlanConfig) -> Vec<DayGoal> {
    let days = total_days.max(1) as usize;
    let len = words.len();
    let base = len / days;
    let remainder = len % days;

    let mut goals = Vec::with_capacity(days);
    let mut cursor = 0;

    for day in 1..=days {
        let count = base + if day <= remainder { 1 } else { 0 };
        let start_index = cursor;
        let end_index = cursor + count;

        goals.push(DayGoal {
            day_number: day as u32,
            start_index,
            end_index,
            excerpt: excerpt(&words[start_index..end_index], config.excerpt_chars),
            word_count: count,
        });

        cursor = end_index;
    }

    goals
}

/// Join a day's words into a bounded preview, stopping at a word boundary.
fn excerpt(words: &[String], max_chars: usize) -> String {
    let mut preview = String::new();
    let mut used = 0;

    for word in words {
        let chars = word.chars().count();
        let needed = if used == 0 { chars } else { chars + 1 };
        if used + needed > max_chars {
            break;
        }
        if used > 0 {
            preview.push(' ');
        }
        preview.push_str(word);
        used += needed;
    }

    preview
}
