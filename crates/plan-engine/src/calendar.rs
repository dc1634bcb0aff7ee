//! Calendar arithmetic around the index-based scheduler
//!
//! The scheduler itself never touches dates; callers compute the inclusive
//! day count for a deadline here and map each goal's day number back to a
//! concrete date when persisting a plan.

use chrono::{Duration, NaiveDate};

/// Inclusive day count between a start date and a deadline, minimum 1.
///
/// A deadline on the start date is one day; a deadline in the past is
/// clamped to 1 so a late plan still schedules everything for today.
pub fn total_days_between(start: NaiveDate, deadline: NaiveDate) -> u32 {
    let days = (deadline - start).num_days() + 1;
    days.max(1) as u32
}

/// Date a goal falls on: a linear offset from the start date, one calendar
/// day per day number, with day 1 on the start date itself.
pub fn date_for_day(start: NaiveDate, day_number: u32) -> NaiveDate {
    start + Duration::days(i64::from(day_number.max(1)) - 1)
}
