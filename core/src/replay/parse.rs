use std::path::Path;

use crate::error::StatsError;
use crate::events_out::LifecycleEvent;

use super::model::JournalReplay;

pub fn parse_journal_str(raw: &str) -> JournalReplay {
    let mut replay = JournalReplay::default();

    for line in raw.lines() {
        let s = line.trim();
        if s.is_empty() {
            continue;
        }

        let ev = match serde_json::from_str::<LifecycleEvent>(s) {
            Ok(ev) => ev,
            Err(e) => {
                tracing::debug!(error = %e, "skipping non-journal line");
                replay.skipped += 1;
                continue;
            }
        };

        if !replay.run_ids.contains(&ev.run_id) {
            replay.run_ids.push(ev.run_id.clone());
        }

        match ev.kind.lifecycle() {
            Some(kind) => {
                replay
                    .log
                    .record(&ev.script_id, ev.script_category, kind, ev.ts_ms);
                replay.applied += 1;
            }
            None => replay.informational += 1,
        }
    }

    if replay.skipped > 0 {
        tracing::warn!(skipped = replay.skipped, "journal contained unreadable lines");
    }
    replay
}

pub async fn parse_journal_file(path: impl AsRef<Path>) -> Result<JournalReplay, StatsError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StatsError::malformed(path.display().to_string(), e))?;
    Ok(parse_journal_str(&raw))
}
