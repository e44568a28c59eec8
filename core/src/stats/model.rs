use serde::Serialize;

use crate::error::StatsError;
use crate::event_log::Millis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTaskDuration {
    pub name: String,
    /// `firstComplete - firstStart`; absent when either timestamp is missing.
    pub duration: Option<Millis>,
    pub errors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteTaskDuration {
    pub name: String,
    /// `lastError - firstStart`; absent when the task never started or never errored.
    pub duration: Option<Millis>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSummary {
    pub has_completed_first_task: bool,
    pub first_task_name: Option<String>,
    pub first_setup_name: Option<String>,
    pub time_to_hello_world: Millis,
    pub total_count_of_task_completions: u64,
    pub completed_task_durations: Vec<CompletedTaskDuration>,
    pub incomplete_attempted_task_durations: Vec<IncompleteTaskDuration>,
}

impl DerivedSummary {
    /// Earliest-started completed task.
    pub fn first_task_name(&self) -> Result<&str, StatsError> {
        self.first_task_name
            .as_deref()
            .ok_or(StatsError::NoCompletedTask)
    }

    /// Earliest-started completed setup script.
    pub fn first_setup_name(&self) -> Result<&str, StatsError> {
        self.first_setup_name
            .as_deref()
            .ok_or(StatsError::MissingReference)
    }

    pub fn completion_rate(&self) -> Option<f64> {
        let attempted =
            self.completed_task_durations.len() + self.incomplete_attempted_task_durations.len();
        if attempted == 0 {
            return None;
        }
        Some(self.completed_task_durations.len() as f64 / attempted as f64)
    }
}
