//! HTTP server implementation for microfile-rs.
//!
//! This module provides a small static file server that leverages Rust's
//! concurrency features and the microfile-rs request line parser.

mod response;
mod config;
mod error;
mod handler;
mod http_server;
mod mime;
mod path;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::FileServer;
