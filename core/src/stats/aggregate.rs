use crate::event_log::{EventLog, Millis, ScriptCategory, ScriptRunStats};

use super::model::{CompletedTaskDuration, DerivedSummary, IncompleteTaskDuration};

/// Earliest-started completed record of one category. A later record only
/// replaces the current pick when it started strictly earlier, so ties keep
/// the first one in log order.
#[derive(Default)]
struct Earliest<'a> {
    picked: Option<(&'a str, &'a ScriptRunStats)>,
}

impl<'a> Earliest<'a> {
    fn offer(&mut self, id: &'a str, stats: &'a ScriptRunStats) {
        if !stats.is_completed() {
            return;
        }
        let replace = match self.picked {
            None => true,
            Some((_, current)) => starts_before(stats.first_start, current.first_start),
        };
        if replace {
            self.picked = Some((id, stats));
        }
    }
}

/// Missing start times sort after every known one.
fn starts_before(candidate: Option<Millis>, current: Option<Millis>) -> bool {
    match (candidate, current) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        _ => false,
    }
}

/// `None` when an operand is missing or the span does not fit in `Millis`.
fn diff(end: Option<Millis>, start: Option<Millis>) -> Option<Millis> {
    end?.checked_sub(start?)
}

pub fn compute_summary(log: &EventLog) -> DerivedSummary {
    let mut first_setup = Earliest::default();
    let mut first_task = Earliest::default();
    let mut completed: Vec<(&str, &ScriptRunStats)> = Vec::new();
    let mut incomplete: Vec<(&str, &ScriptRunStats)> = Vec::new();

    for (id, stats) in log.iter() {
        match stats.script_category {
            ScriptCategory::Setup => first_setup.offer(id, stats),
            ScriptCategory::Task => {
                first_task.offer(id, stats);
                if stats.is_completed() {
                    completed.push((id, stats));
                } else {
                    incomplete.push((id, stats));
                }
            }
        }
    }

    let has_completed_first_task = first_setup.picked.is_some() && first_task.picked.is_some();
    let time_to_hello_world = match (first_setup.picked, first_task.picked) {
        (Some((_, setup)), Some((_, task))) => {
            diff(task.first_complete, setup.first_start).unwrap_or(0)
        }
        _ => 0,
    };

    let total_count_of_task_completions: u64 =
        completed.iter().map(|(_, s)| s.count_complete).sum();

    let completed_task_durations = completed
        .iter()
        .map(|(id, s)| CompletedTaskDuration {
            name: id.to_string(),
            duration: diff(s.first_complete, s.first_start),
            errors: s.count_error_before_first_complete,
        })
        .collect();

    let incomplete_attempted_task_durations = incomplete
        .iter()
        .map(|(id, s)| IncompleteTaskDuration {
            name: id.to_string(),
            duration: diff(s.last_error, s.first_start),
        })
        .collect();

    DerivedSummary {
        has_completed_first_task,
        first_task_name: first_task.picked.map(|(id, _)| id.to_string()),
        first_setup_name: first_setup.picked.map(|(id, _)| id.to_string()),
        time_to_hello_world,
        total_count_of_task_completions,
        completed_task_durations,
        incomplete_attempted_task_durations,
    }
}
