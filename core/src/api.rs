//! Stable re-exports for the `cli` crate and external consumers.
//!
//! Prefer importing from `cyoa_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, AppConfig, EventLogConfig, EventsOutConfig, LoggingConfig, PromptConfig,
};
pub use crate::error::{
    ArtefactsError, CliError, EntityIdError, EnvError, ErrorCode, LoggerError, StatsError,
    StoreError,
};
pub use crate::event_log::{
    load_event_log, EventLog, EventStore, LifecycleKind, Millis, ScriptCategory, ScriptRunStats,
};
pub use crate::events_out::{start_events_out, EventsOut, EventsOutTx, JournalKind, LifecycleEvent};
pub use crate::logger::{apply_ansi, AnsiStyle, LoggerOptions, ScriptLogger};
pub use crate::replay::{rebuild_cmd, JournalReplay, RebuildArgs};
pub use crate::script::{
    hashscan_url, read_artefacts, write_artefacts, EntityId, ExplorerKind, ScriptEnv,
    TokenArtefacts, DEFAULT_ARTEFACTS_FILE,
};
pub use crate::stats::{compute_summary, format_text, summarize_file, DerivedSummary};
