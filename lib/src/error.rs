extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Record(#[from] RecordError),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader Error: {0}")]
    Reader(String),

    #[error("Writer Error: {0}")]
    Writer(String),
}

/// Malformed rows in the raw dataset.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Record Error: line {line} has no {field} column (index {index})")]
    MissingField {
        line: u64,
        field: &'static str,
        index: usize,
    },

    #[error("Record Error: line {line} has label {value:?}, expected an unsigned integer")]
    Label { line: u64, value: String },
}
