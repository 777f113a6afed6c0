//! Error types for the HTTP server.

use thiserror::Error;

/// Errors that can occur during HTTP server operation.
///
/// Malformed requests and missing files are answered on the wire (or
/// silently dropped) rather than surfaced here; what remains is I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
