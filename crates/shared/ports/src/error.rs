use fixlog_core::SessionId;
use thiserror::Error;

/// Errors raised by a settings source
///
/// A missing setting is not an error; these cover a source that cannot answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value {value:?} for {setting} in session {session}")]
    InvalidValue {
        session: SessionId,
        setting: String,
        value: String,
    },

    #[error("Setting {setting} not found for session {session}")]
    NotFound { session: SessionId, setting: String },

    #[error("Settings source unavailable: {0}")]
    Unavailable(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised by a log sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Write failed: {0}")]
    Write(String),

    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;
