//! Error types for the filename parser.

use thiserror::Error;

/// Errors that can occur when parsing a release filename.
///
/// Parsing is all-or-nothing: a failure means no strategy produced a full
/// capture set, and the caller should skip the file rather than abort the
/// batch.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No parsing strategy matched the filename.
    #[error("no pattern matched filename: {filename}")]
    NoMatch { filename: String },

    /// The input was empty.
    #[error("empty filename")]
    EmptyFilename,
}
