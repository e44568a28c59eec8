use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_log::{LifecycleKind, Millis, ScriptCategory};

pub const JOURNAL_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalKind {
    Start,
    Complete,
    Error,
    Section,
    Reminder,
}

impl JournalKind {
    /// The counter-changing part of the journal; sections and reminders are informational.
    pub fn lifecycle(self) -> Option<LifecycleKind> {
        match self {
            Self::Start => Some(LifecycleKind::Start),
            Self::Complete => Some(LifecycleKind::Complete),
            Self::Error => Some(LifecycleKind::Error),
            Self::Section | Self::Reminder => None,
        }
    }
}

impl From<LifecycleKind> for JournalKind {
    fn from(kind: LifecycleKind) -> Self {
        match kind {
            LifecycleKind::Start => Self::Start,
            LifecycleKind::Complete => Self::Complete,
            LifecycleKind::Error => Self::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub v: u32,

    #[serde(rename = "type")]
    pub kind: JournalKind,

    pub ts: DateTime<Utc>,

    pub ts_ms: Millis,

    pub run_id: String,

    pub script_id: String,

    pub script_category: ScriptCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LifecycleEvent {
    pub fn new(
        kind: JournalKind,
        ts: DateTime<Utc>,
        run_id: impl Into<String>,
        script_id: impl Into<String>,
        script_category: ScriptCategory,
    ) -> Self {
        Self {
            v: JOURNAL_VERSION,
            kind,
            ts,
            ts_ms: ts.timestamp_millis(),
            run_id: run_id.into(),
            script_id: script_id.into(),
            script_category,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
