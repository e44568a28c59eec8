use crate::event_log::EventLog;

#[derive(Debug, Clone, Default)]
pub struct JournalReplay {
    pub log: EventLog,
    /// Lifecycle lines folded into `log`.
    pub applied: usize,
    /// Section and reminder lines, kept out of the counters.
    pub informational: usize,
    /// Non-empty lines that were not journal events.
    pub skipped: usize,
    pub run_ids: Vec<String>,
}
