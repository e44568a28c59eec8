use std::fmt::Write as _;
use std::path::Path;

use crate::error::StatsError;
use crate::event_log::load_event_log;

use super::aggregate::compute_summary;
use super::model::DerivedSummary;

pub async fn summarize_file(path: impl AsRef<Path>) -> Result<DerivedSummary, StatsError> {
    let log = load_event_log(path).await?;
    let summary = compute_summary(&log);
    tracing::info!(
        scripts = log.len(),
        completed_tasks = summary.completed_task_durations.len(),
        incomplete_tasks = summary.incomplete_attempted_task_durations.len(),
        "run log summarized"
    );
    Ok(summary)
}

fn fmt_ms(v: Option<i64>) -> String {
    match v {
        Some(ms) => format!("{ms}ms"),
        None => "-".to_string(),
    }
}

pub fn format_text(summary: &DerivedSummary) -> String {
    let mut out = String::new();

    out.push_str("Run log summary\n");
    let _ = writeln!(
        out,
        "has_completed_first_task: {}",
        summary.has_completed_first_task
    );
    let _ = writeln!(
        out,
        "first_setup_name: {}",
        summary.first_setup_name.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "first_task_name: {}",
        summary.first_task_name.as_deref().unwrap_or("-")
    );
    let _ = writeln!(out, "time_to_hello_world: {}ms", summary.time_to_hello_world);
    let _ = writeln!(
        out,
        "total_count_of_task_completions: {}",
        summary.total_count_of_task_completions
    );
    if let Some(rate) = summary.completion_rate() {
        let _ = writeln!(out, "completion_rate: {:.0}%", rate * 100.0);
    }

    if !summary.completed_task_durations.is_empty() {
        out.push_str("completed tasks:\n");
        for t in &summary.completed_task_durations {
            let _ = writeln!(
                out,
                "- {}: duration={} errors_before_first_complete={}",
                t.name,
                fmt_ms(t.duration),
                t.errors
            );
        }
    }

    if !summary.incomplete_attempted_task_durations.is_empty() {
        out.push_str("incomplete tasks:\n");
        for t in &summary.incomplete_attempted_task_durations {
            let _ = writeln!(out, "- {}: time_to_last_error={}", t.name, fmt_ms(t.duration));
        }
    }

    out
}
