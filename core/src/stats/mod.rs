//! Onboarding metrics derived from the run log.
pub mod aggregate;
pub mod model;
pub mod report;

pub use aggregate::compute_summary;
pub use model::{CompletedTaskDuration, DerivedSummary, IncompleteTaskDuration};
pub use report::{format_text, summarize_file};
