//! Plan-level statistics derived from goal completion

use study_types::PlanProgress;

/// Rounded completion percentage; 0 when a plan has no goals.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Summarize completion over a plan's goals.
pub fn plan_progress(completed_flags: &[bool]) -> PlanProgress {
    let total_goals = completed_flags.len();
    let completed_goals = completed_flags.iter().filter(|&&done| done).count();
    PlanProgress {
        total_goals,
        completed_goals,
        completion_rate: completion_rate(completed_goals, total_goals),
    }
}

/// Average words per day as stored on a plan, rounded up so the advertised
/// pace always covers the document by the deadline.
pub fn daily_word_count(total_words: usize, total_days: u32) -> usize {
    let days = total_days.max(1) as usize;
    total_words.div_ceil(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rate_rounds_to_nearest_percent() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(3, 3), 100);
    }

    #[test]
    fn test_empty_plan_has_zero_rate() {
        assert_eq!(completion_rate(0, 0), 0);
    }

    #[test]
    fn test_plan_progress_counts_completed_goals() {
        let progress = plan_progress(&[true, false, true, false]);
        assert_eq!(
            progress,
            PlanProgress {
                total_goals: 4,
                completed_goals: 2,
                completion_rate: 50,
            }
        );
    }

    #[test]
    fn test_daily_word_count_rounds_up() {
        assert_eq!(daily_word_count(10, 3), 4);
        assert_eq!(daily_word_count(9, 3), 3);
        assert_eq!(daily_word_count(0, 5), 0);
    }

    #[test]
    fn test_daily_word_count_clamps_zero_days() {
        assert_eq!(daily_word_count(10, 0), 10);
    }
}
