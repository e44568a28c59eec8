mod common;

use common::{log_from_json, replayed};
use cyoa_core::error::StatsError;
use cyoa_core::event_log::{EventLog, LifecycleKind, ScriptCategory};
use cyoa_core::stats::{
    compute_summary, summarize_file, CompletedTaskDuration, IncompleteTaskDuration,
};
use pretty_assertions::assert_eq;

use LifecycleKind::{Complete, Error, Start};

#[test]
fn scenario_a_setup_then_completed_task() {
    let log = log_from_json(
        r#"{
            "setupA": {"scriptCategory": "setup", "firstStart": 100, "countComplete": 1},
            "taskA": {
                "scriptCategory": "task",
                "firstStart": 150,
                "firstComplete": 300,
                "countComplete": 2,
                "countErrorBeforeFirstComplete": 1
            }
        }"#,
    );

    let summary = compute_summary(&log);
    assert!(summary.has_completed_first_task);
    assert_eq!(summary.first_task_name(), Ok("taskA"));
    assert_eq!(summary.first_setup_name(), Ok("setupA"));
    assert_eq!(summary.time_to_hello_world, 200);
    assert_eq!(summary.total_count_of_task_completions, 2);
    assert_eq!(
        summary.completed_task_durations,
        vec![CompletedTaskDuration {
            name: "taskA".to_string(),
            duration: Some(150),
            errors: 1,
        }]
    );
    assert!(summary.incomplete_attempted_task_durations.is_empty());
}

#[test]
fn scenario_b_only_an_abandoned_task() {
    let log = log_from_json(
        r#"{"taskB": {"scriptCategory": "task", "firstStart": 50, "countComplete": 0, "lastError": 90}}"#,
    );

    let summary = compute_summary(&log);
    assert!(!summary.has_completed_first_task);
    assert_eq!(summary.time_to_hello_world, 0);
    assert_eq!(
        summary.incomplete_attempted_task_durations,
        vec![IncompleteTaskDuration {
            name: "taskB".to_string(),
            duration: Some(40),
        }]
    );
    assert_eq!(summary.first_task_name, None);
    assert_eq!(summary.first_task_name(), Err(StatsError::NoCompletedTask));
    assert_eq!(summary.first_setup_name(), Err(StatsError::MissingReference));
}

#[test]
fn scenario_c_empty_log() {
    let summary = compute_summary(&log_from_json("{}"));
    assert!(!summary.has_completed_first_task);
    assert_eq!(summary.total_count_of_task_completions, 0);
    assert!(summary.completed_task_durations.is_empty());
    assert!(summary.incomplete_attempted_task_durations.is_empty());
    assert_eq!(summary.completion_rate(), None);
}

fn mixed_log() -> EventLog {
    let mut log = EventLog::new();
    log.insert(
        "init",
        replayed(ScriptCategory::Setup, &[(Start, 1_000), (Complete, 1_500)]),
    );
    log.insert(
        "tokenHts",
        replayed(
            ScriptCategory::Task,
            &[(Start, 2_000), (Error, 2_100), (Start, 2_200), (Complete, 2_900), (Complete, 4_000)],
        ),
    );
    log.insert(
        "tokenHscs",
        replayed(ScriptCategory::Task, &[(Start, 3_000), (Error, 3_400), (Error, 3_900)]),
    );
    log.insert(
        "tokenInterop",
        replayed(ScriptCategory::Task, &[(Start, 5_000), (Complete, 5_600)]),
    );
    log.insert(
        "accounts",
        replayed(ScriptCategory::Setup, &[(Start, 500)]),
    );
    log
}

#[test]
fn task_records_are_partitioned_exactly_once() {
    let log = mixed_log();
    let summary = compute_summary(&log);

    let mut names: Vec<&str> = summary
        .completed_task_durations
        .iter()
        .map(|t| t.name.as_str())
        .chain(
            summary
                .incomplete_attempted_task_durations
                .iter()
                .map(|t| t.name.as_str()),
        )
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["tokenHscs", "tokenHts", "tokenInterop"]);

    let completed: Vec<&str> = summary
        .completed_task_durations
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(completed, vec!["tokenHts", "tokenInterop"]);
}

#[test]
fn completion_total_and_durations_follow_the_counters() {
    let summary = compute_summary(&mixed_log());

    assert_eq!(summary.total_count_of_task_completions, 3);
    assert_eq!(summary.first_setup_name(), Ok("init"));
    assert_eq!(summary.first_task_name(), Ok("tokenHts"));
    assert_eq!(summary.time_to_hello_world, 2_900 - 1_000);
    assert!(summary.time_to_hello_world >= 0);

    assert_eq!(summary.completed_task_durations[0].duration, Some(900));
    assert_eq!(summary.completed_task_durations[0].errors, 1);
    assert_eq!(
        summary.incomplete_attempted_task_durations[0].duration,
        Some(900)
    );
}

#[test]
fn summary_is_idempotent() {
    let log = mixed_log();
    assert_eq!(compute_summary(&log), compute_summary(&log));
}

#[test]
fn summary_serializes_with_camel_case_keys() {
    let summary = compute_summary(&mixed_log());
    let v = serde_json::to_value(&summary).unwrap();
    assert_eq!(v["hasCompletedFirstTask"], true);
    assert_eq!(v["firstTaskName"], "tokenHts");
    assert_eq!(v["timeToHelloWorld"], 1_900);
    assert_eq!(v["totalCountOfTaskCompletions"], 3);
    assert_eq!(v["completedTaskDurations"][0]["name"], "tokenHts");
    assert_eq!(v["incompleteAttemptedTaskDurations"][0]["duration"], 900);
}

#[tokio::test]
async fn summarize_file_reads_the_log_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logger.json");
    std::fs::write(&path, serde_json::to_string(&mixed_log()).unwrap()).unwrap();

    let summary = summarize_file(&path).await.unwrap();
    assert_eq!(summary, compute_summary(&mixed_log()));
}

#[tokio::test]
async fn summarize_file_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logger.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = summarize_file(&path).await.unwrap_err();
    assert!(matches!(err, StatsError::MalformedInput { .. }));
}
