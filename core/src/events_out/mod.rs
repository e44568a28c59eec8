//! Append-only JSONL journal of every logger call.
pub mod event;
pub mod helpers;
pub mod writer;

pub use crate::config::EventsOutConfig;
pub use event::{JournalKind, LifecycleEvent, JOURNAL_VERSION};
pub use helpers::write_lifecycle_event;
pub use writer::{start_events_out, EventsOut, EventsOutTx};
