use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version string stamped into transaction memos by the scripts.
    #[serde(default = "default_version")]
    pub version: String,

    /// `.env` file holding operator credentials and RPC endpoints.
    #[serde(default = "default_env_file")]
    pub env_file: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub event_log: EventLogConfig,

    #[serde(default)]
    pub events_out: EventsOutConfig,

    #[serde(default)]
    pub prompts: PromptConfig,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_env_file() -> String {
    "../.env".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            env_file: default_env_file(),
            logging: LoggingConfig::default(),
            event_log: EventLogConfig::default(),
            events_out: EventsOutConfig::default(),
            prompts: PromptConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "cyoa_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogConfig {
    /// Shared run log, one directory above the script being run.
    #[serde(default = "default_event_log_path")]
    pub path: String,
}

fn default_event_log_path() -> String {
    "../logger.json".to_string()
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            path: default_event_log_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsOutConfig {
    #[serde(default = "default_events_out_enabled")]
    pub enabled: bool,
    /// File path, or `stdout:`.
    #[serde(default = "default_events_out_path")]
    pub path: String,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default)]
    pub drop_when_full: bool,
}

fn default_events_out_enabled() -> bool {
    true
}

fn default_events_out_path() -> String {
    "../logger.events.jsonl".to_string()
}

fn default_channel_capacity() -> usize {
    256
}

impl Default for EventsOutConfig {
    fn default() -> Self {
        Self {
            enabled: default_events_out_enabled(),
            path: default_events_out_path(),
            channel_capacity: default_channel_capacity(),
            drop_when_full: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Pause at `log_section_with_wait_prompt` until Enter is pressed.
    #[serde(default = "default_wait")]
    pub wait: bool,
}

fn default_wait() -> bool {
    true
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            wait: default_wait(),
        }
    }
}
