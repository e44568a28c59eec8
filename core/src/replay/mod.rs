//! Rebuild the run log from the lifecycle journal.
pub mod cmd;
pub mod model;
pub mod parse;

pub use cmd::{rebuild_cmd, RebuildArgs};
pub use model::JournalReplay;
pub use parse::{parse_journal_file, parse_journal_str};
