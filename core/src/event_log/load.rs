use std::path::Path;

use crate::error::{StatsError, StoreError};

use super::model::EventLog;

/// Parse the JSON text of an event log. `source` only labels errors.
pub fn parse_event_log(source: &str, raw: &str) -> Result<EventLog, StatsError> {
    let log: EventLog =
        serde_json::from_str(raw).map_err(|e| StatsError::malformed(source, e))?;
    for (id, stats) in log.iter() {
        stats
            .check_ordering()
            .map_err(|reason| StatsError::malformed(source, format!("{id}: {reason}")))?;
    }
    Ok(log)
}

/// Load a snapshot of the event log for aggregation.
pub async fn load_event_log(path: impl AsRef<Path>) -> Result<EventLog, StatsError> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StatsError::malformed(label.clone(), e))?;
    let log = parse_event_log(&label, &raw)?;
    tracing::debug!(path = %label, scripts = log.len(), "event log loaded");
    Ok(log)
}

/// Writer-side read: a missing file is an empty log, anything else must parse.
pub fn read_event_log_or_empty(path: impl AsRef<Path>) -> Result<EventLog, StatsError> {
    let path = path.as_ref();
    let label = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_event_log(&label, &raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EventLog::new()),
        Err(e) => Err(StatsError::malformed(label, e)),
    }
}

/// Replace the event log file. The new content goes to a sibling temp file
/// first so readers never see a half-written log.
pub fn save_event_log(path: impl AsRef<Path>, log: &EventLog) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(log)?;

    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(format!(".{}.tmp", std::process::id()));
    let tmp = std::path::PathBuf::from(tmp);

    std::fs::write(&tmp, json).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        write_err(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::{LifecycleKind, ScriptCategory};

    #[test]
    fn rejects_complete_before_start() {
        let raw = r#"{"t": {"scriptCategory": "task", "firstStart": 50, "firstComplete": 10, "countComplete": 1}}"#;
        let err = parse_event_log("mem", raw).unwrap_err();
        match err {
            StatsError::MalformedInput { path, reason } => {
                assert_eq!(path, "mem");
                assert!(reason.starts_with("t:"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let raw = r#"{"t": {"scriptCategory": "demo"}}"#;
        assert!(matches!(
            parse_event_log("mem", raw),
            Err(StatsError::MalformedInput { .. })
        ));
    }

    #[test]
    fn missing_file_reads_as_empty_for_writers() {
        let dir = tempfile::tempdir().unwrap();
        let log = read_event_log_or_empty(dir.path().join("logger.json")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn save_then_read_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logger.json");

        let mut log = EventLog::new();
        log.record("tokenHts", ScriptCategory::Task, LifecycleKind::Start, 3);
        log.record("setup", ScriptCategory::Setup, LifecycleKind::Start, 1);
        save_event_log(&path, &log).unwrap();

        let back = read_event_log_or_empty(&path).unwrap();
        assert_eq!(back, log);
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn async_load_reports_missing_file_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_event_log(dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, StatsError::MalformedInput { .. }));
    }
}
