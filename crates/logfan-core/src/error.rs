//! Logger construction errors

use thiserror::Error;

/// Errors that can occur while building a logger
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The remote DSN could not be parsed
    #[error("Invalid remote DSN: {0}")]
    InvalidDsn(String),

    /// The remote client could not be initialised
    #[error("Remote client initialization failed: {0}")]
    RemoteInit(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
