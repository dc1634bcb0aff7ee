/// A contiguous slice of the document's word sequence assigned to one
/// calendar day of a study plan.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DayGoal {
    pub day_number: u32,    // 1-based, contiguous
    pub start_index: usize, // Index into the word sequence
    pub end_index: usize,   // Exclusive; equals next day's start_index
    pub excerpt: String,    // Bounded preview, not the full segment text
    pub word_count: usize,
}

/// Completion statistics for one plan, derived from its goals.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanProgress {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub completion_rate: u32, // Rounded percentage, 0 when there are no goals
}
