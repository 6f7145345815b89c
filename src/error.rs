//! Input and output errors for the command-line front end.
//!
//! The minification pipeline itself never fails; only reading the stylesheet
//! and writing the result can.

use std::path::PathBuf;

/// Errors that can occur while reading input or writing output.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input from {origin} is not valid UTF-8")]
    InvalidUtf8 { origin: String },

    #[error("Failed to write {}: {source}", .target.display())]
    Write {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
