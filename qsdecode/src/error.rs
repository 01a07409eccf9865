use std::io;

use thiserror::Error;

/// Errors raised while pumping a query string through the parser.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read query string from stdin: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write decoded output: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;
