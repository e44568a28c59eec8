use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptCategory {
    Setup,
    Task,
}

impl ScriptCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "setup" => Ok(Self::Setup),
            "task" => Ok(Self::Task),
            other => Err(format!("unknown script category: {other}")),
        }
    }
}

/// Lifecycle events that change a script's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleKind {
    Start,
    Complete,
    Error,
}

/// Accumulated lifecycle statistics for one script across all of its runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRunStats {
    pub script_category: ScriptCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_start: Option<Millis>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_complete: Option<Millis>,

    #[serde(default)]
    pub count_complete: u64,

    #[serde(default)]
    pub count_error_before_first_complete: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<Millis>,

    #[serde(default)]
    pub count_start: u64,

    #[serde(default)]
    pub count_error: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_start: Option<Millis>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_complete: Option<Millis>,
}

impl ScriptRunStats {
    pub fn new(script_category: ScriptCategory) -> Self {
        Self {
            script_category,
            first_start: None,
            first_complete: None,
            count_complete: 0,
            count_error_before_first_complete: 0,
            last_error: None,
            count_start: 0,
            count_error: 0,
            last_start: None,
            last_complete: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.count_complete > 0
    }

    /// Fold one lifecycle event into the counters.
    ///
    /// `firstStart` and `firstComplete` keep the earliest timestamp seen, and a
    /// completion never lands before `firstStart`: a complete with no earlier
    /// start also counts as the start. Events arriving out of order therefore
    /// still yield a record that passes `check_ordering`.
    pub fn apply(&mut self, kind: LifecycleKind, ts: Millis) {
        match kind {
            LifecycleKind::Start => {
                self.first_start = Some(earliest(self.first_start, ts));
                self.last_start = Some(ts);
                self.count_start += 1;
            }
            LifecycleKind::Complete => {
                self.first_start = Some(earliest(self.first_start, ts));
                self.first_complete = Some(earliest(self.first_complete, ts));
                self.last_complete = Some(ts);
                self.count_complete += 1;
            }
            LifecycleKind::Error => {
                self.last_error = Some(ts);
                self.count_error += 1;
                if self.count_complete == 0 {
                    self.count_error_before_first_complete += 1;
                }
            }
        }
    }

    pub(crate) fn check_ordering(&self) -> Result<(), String> {
        if let (Some(start), Some(complete)) = (self.first_start, self.first_complete) {
            if complete < start {
                return Err(format!(
                    "firstComplete ({complete}) is earlier than firstStart ({start})"
                ));
            }
        }
        Ok(())
    }
}

fn earliest(current: Option<Millis>, ts: Millis) -> Millis {
    current.map_or(ts, |c| c.min(ts))
}

/// Script id -> stats, iterated in the order ids were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    records: BTreeMap<String, ScriptRunStats>,
    order: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, script_id: &str) -> Option<&ScriptRunStats> {
        self.records.get(script_id)
    }

    pub fn contains(&self, script_id: &str) -> bool {
        self.records.contains_key(script_id)
    }

    /// Insert or replace a record. A new id is appended to the iteration order;
    /// replacing keeps the original position.
    pub fn insert(
        &mut self,
        script_id: impl Into<String>,
        stats: ScriptRunStats,
    ) -> Option<ScriptRunStats> {
        let script_id = script_id.into();
        if !self.records.contains_key(&script_id) {
            self.order.push(script_id.clone());
        }
        self.records.insert(script_id, stats)
    }

    pub fn entry_or_new(
        &mut self,
        script_id: &str,
        category: ScriptCategory,
    ) -> &mut ScriptRunStats {
        if !self.records.contains_key(script_id) {
            self.order.push(script_id.to_string());
        }
        self.records
            .entry(script_id.to_string())
            .or_insert_with(|| ScriptRunStats::new(category))
    }

    /// Record a lifecycle event for `script_id`, creating the record if needed.
    /// The declared category always wins over whatever was stored before.
    pub fn record(
        &mut self,
        script_id: &str,
        category: ScriptCategory,
        kind: LifecycleKind,
        ts: Millis,
    ) -> &ScriptRunStats {
        let stats = self.entry_or_new(script_id, category);
        stats.script_category = category;
        stats.apply(kind, ts);
        stats
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScriptRunStats)> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(|s| (id.as_str(), s)))
    }

    pub fn script_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl Serialize for EventLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, stats) in self.iter() {
            map.serialize_entry(id, stats)?;
        }
        map.end()
    }
}

struct EventLogVisitor;

impl<'de> Visitor<'de> for EventLogVisitor {
    type Value = EventLog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of script id to run stats")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut log = EventLog::new();
        while let Some((id, stats)) = access.next_entry::<String, ScriptRunStats>()? {
            if log.contains(&id) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate script id: {id}"
                )));
            }
            log.insert(id, stats);
        }
        Ok(log)
    }
}

impl<'de> Deserialize<'de> for EventLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EventLogVisitor)
    }
}
