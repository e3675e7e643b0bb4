//! Error types for the runner crate

use fixlog_core::ParseSessionIdError;
use fixlog_filter::FilterError;
use fixlog_ports::{ConfigError, SinkError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Invalid session id: {0}")]
    SessionId(#[from] ParseSessionIdError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Filter setup failed: {0}")]
    Filter(#[from] FilterError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Failed to read capture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Capture line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}
