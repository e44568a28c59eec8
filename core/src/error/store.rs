use thiserror::Error;

use super::stats::StatsError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot load existing event log: {0}")]
    Load(#[from] StatsError),

    #[error("write failed on {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize event log: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("lifecycle event not recorded: {0}")]
    Store(#[from] StoreError),

    #[error("wait prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("unknown ansi style '{0}'")]
    UnknownStyle(String),
}
