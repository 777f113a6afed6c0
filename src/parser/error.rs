//! Error types for the request line parser.

use thiserror::Error;

/// Errors that can occur while parsing a request line.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line is empty or contains only whitespace.
    #[error("Empty request line")]
    EmptyRequestLine,

    /// The request line has fewer than two whitespace-separated tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),
}
