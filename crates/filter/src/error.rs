//! Error types for the filter crate

use fixlog_ports::{ConfigError, SinkError};
use thiserror::Error;

/// Errors raised while setting up a filtered log for a session
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type FilterResult<T> = std::result::Result<T, FilterError>;
