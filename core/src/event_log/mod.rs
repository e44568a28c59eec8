//! The per-script run log (`logger.json`): model, loading and the writer-side store.
pub mod load;
pub mod model;
pub mod store;

pub use load::{load_event_log, parse_event_log, read_event_log_or_empty, save_event_log};
pub use model::{EventLog, LifecycleKind, Millis, ScriptCategory, ScriptRunStats};
pub use store::EventStore;
