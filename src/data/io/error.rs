//! Shared error types for dataset I/O.

use std::io;

/// Errors that can occur when loading a round's dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected {expected} integer fields, got {got}")]
    RowFormat {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid integer token '{token}'")]
    InvalidToken { line: usize, token: String },
}
