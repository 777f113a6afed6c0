//! HTTP server implementation.

use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use log::{error, info, warn};

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::handle_connection;
use crate::server::response::{HttpResponse, StatusCode};

/// A static file HTTP server.
pub struct FileServer {
    /// The server configuration.
    pub config: ServerConfig,
}

impl FileServer {
    /// Create a new file server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Display the server banner and the serving directory.
    fn display_server_info(&self) {
        // Display the banner
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        info!("Serving files from {root}/", root = self.config.web_root.display());
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}/", addr = self.config.addr);
        Ok(listener)
    }

    /// Start the server and listen for incoming connections.
    ///
    /// The accept loop never returns under normal operation; an early return
    /// means the listening socket could not be bound, which is fatal.
    pub async fn start(&self) -> Result<(), Error> {
        // Display server information
        self.display_server_info();

        // Set up the TCP listener
        let listener = self.setup_listener().await?;

        // Create a semaphore to limit concurrent connections
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_connections));

        // Shared read-only configuration for the connection tasks
        let config = Arc::new(self.config.clone());

        loop {
            match listener.accept().await {
                Ok((mut socket, addr)) => {
                    // Try to acquire a permit from the semaphore
                    let permit = match semaphore.clone().try_acquire_owned() {
                        Ok(permit) => permit,
                        Err(_) => {
                            warn!("Connection limit reached, rejecting connection from {addr}");
                            let response = HttpResponse::error_page(StatusCode::ServiceUnavailable);
                            let _ = socket.write_all(&response.to_bytes()).await;
                            continue;
                        }
                    };

                    let config = config.clone();

                    // Spawn a task to handle the connection
                    tokio::spawn(async move {
                        // The permit is dropped when the task completes, releasing the slot
                        let _permit = permit;

                        if let Err(e) = handle_connection(&mut socket, &config).await {
                            error!("Error handling connection from {addr}: {e}");
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {e}");

                    // Wait a bit before retrying
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }
}
