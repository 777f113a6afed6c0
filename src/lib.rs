//! A minimal static file HTTP server.
//!
//! This crate serves files from a fixed web root over a small subset of
//! HTTP/1.1, with a focus on simplicity and correctness.
//!
//! # Features
//!
//! - Parse a single HTTP request line per connection
//! - Serve files beneath a fixed web root with extension-based content types
//! - One response per connection, always `Connection: close`
//! - 404 and 405 error pages, 503 when the connection limit is reached
//! - Web-root containment: `..` segments can never escape the served tree
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use microfile_rs::{parse_request_line, Method};
//!
//! let line = "GET /index.html HTTP/1.1";
//!
//! match parse_request_line(line) {
//!     Ok(request) => {
//!         assert_eq!(request.method, Method::GET);
//!         assert_eq!(request.target, "/index.html");
//!     },
//!     Err(err) => {
//!         println!("Error parsing request line: {}", err);
//!     }
//! }
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use microfile_rs::{FileServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = FileServer::new(ServerConfig::default());
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, Method, RequestLine, parse_request_line};
pub use server::{Error as ServerError, FileServer, HttpResponse, ServerConfig, StatusCode};
