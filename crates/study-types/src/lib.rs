pub mod plan;
pub mod types;

pub use plan::{DayGoal, PlanProgress};
pub use types::{Analysis, Highlight, Sentence};
