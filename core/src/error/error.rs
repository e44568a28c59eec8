use thiserror::Error;

use super::stats::StatsError;
use super::store::{LoggerError, StoreError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("stats failed: {0}")]
    Stats(#[from] StatsError),
    #[error("event store failed: {0}")]
    Store(#[from] StoreError),
    #[error("logger failed: {0}")]
    Logger(#[from] LoggerError),
    #[error("environment error: {0}")]
    Env(#[from] EnvError),
    #[error("invalid entity id: {0}")]
    EntityId(#[from] EntityIdError),
    #[error("artefacts error: {0}")]
    Artefacts(#[from] ArtefactsError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("failed to read env file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid env line at {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("must set {} environment variables", .0.join(", "))]
    Missing(Vec<String>),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntityIdError {
    #[error("expected shard.realm.num, got '{0}'")]
    Format(String),
    #[error("component '{component}' of '{input}' is not a number")]
    Component { input: String, component: String },
    #[error("'{0}' is not a 20-byte hex address")]
    Address(String),
    #[error("address {0} is not a long-zero entity address")]
    NotLongZero(String),
}

#[derive(Error, Debug)]
pub enum ArtefactsError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("serde_json {context}: {source}")]
    Json {
        context: &'static str,
        source: serde_json::Error,
    },
}
