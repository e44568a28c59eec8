//! Console + run-log logger handed to each tutorial script.
pub mod ansi;
pub mod script_logger;

pub use ansi::{apply_ansi, AnsiStyle};
pub use script_logger::{LoggerOptions, ScriptLogger};
