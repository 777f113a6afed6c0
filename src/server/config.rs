//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// HTTP server configuration.
///
/// The binary runs with [`ServerConfig::default`]; library callers may
/// construct their own. The web root is read-only shared state, safe to hand
/// to every connection task.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The directory all served files must live under.
    pub web_root: PathBuf,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:1989".parse().unwrap(),
            web_root: PathBuf::from("src"),
            max_connections: 1024,
            read_buffer_size: 8192,
        }
    }
}
