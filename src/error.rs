extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Prep(#[from] tweetprep::error::Error),

    #[error("Report Error: {0}")]
    Report(String),

    #[error("Worker Error: {0}")]
    Worker(String),
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Invalid Setting: {0}")]
    Invalid(String),
}
