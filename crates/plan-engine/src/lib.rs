//! Daily goal planning for study documents
//!
//! Partitions a document's word sequence into contiguous day segments sized
//! to fit a deadline, and provides the calendar and progress arithmetic the
//! surrounding product performs around that partition. The scheduler itself
//! is purely index-based; mapping day numbers to dates lives in
//! [`calendar`].

pub mod calendar;
pub mod progress;
pub mod scheduler;

pub use scheduler::{build_plan, build_plan_with, PlanConfig};
