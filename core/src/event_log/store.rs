use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::load::{read_event_log_or_empty, save_event_log};
use super::model::{EventLog, LifecycleKind, Millis, ScriptCategory, ScriptRunStats};

/// Writer handle for the shared event log file.
///
/// Each call reloads the file, folds one event in and replaces the file, so
/// separate script processes run one after another all land in the same log.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> Result<EventLog, StoreError> {
        Ok(read_event_log_or_empty(&self.path)?)
    }

    #[tracing::instrument(
        name = "event_store.record",
        skip(self),
        fields(path = %self.path.display())
    )]
    pub fn record(
        &self,
        script_id: &str,
        category: ScriptCategory,
        kind: LifecycleKind,
        ts: Millis,
    ) -> Result<ScriptRunStats, StoreError> {
        let mut log = read_event_log_or_empty(&self.path)?;
        let updated = log.record(script_id, category, kind, ts).clone();
        save_event_log(&self.path, &log)?;
        Ok(updated)
    }

    pub fn replace(&self, log: &EventLog) -> Result<(), StoreError> {
        save_event_log(&self.path, log)
    }
}
