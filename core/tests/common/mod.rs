#![allow(dead_code)]

use cyoa_core::event_log::{
    parse_event_log, EventLog, LifecycleKind, ScriptCategory, ScriptRunStats,
};

pub fn log_from_json(raw: &str) -> EventLog {
    parse_event_log("test", raw).expect("test log should parse")
}

/// A record built by replaying `(kind, ts)` pairs, the way the logger would.
pub fn replayed(category: ScriptCategory, events: &[(LifecycleKind, i64)]) -> ScriptRunStats {
    let mut stats = ScriptRunStats::new(category);
    for (kind, ts) in events {
        stats.apply(*kind, *ts);
    }
    stats
}
