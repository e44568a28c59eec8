use thiserror::Error;

/// Stable exit codes for the run-log commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Success = 0,
    ConfigError = 11,
    IoError = 20,
    MalformedInput = 30,
    MissingReference = 31,
    General = 50,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("event log {path} is malformed: {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("no task script has completed yet")]
    NoCompletedTask,

    #[error("no setup script has completed yet")]
    MissingReference,
}

impl StatsError {
    pub fn malformed(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MalformedInput { .. } => ErrorCode::MalformedInput,
            Self::NoCompletedTask => ErrorCode::MissingReference,
            Self::MissingReference => ErrorCode::MissingReference,
        }
    }
}
