//! Static file server binary: serves the `src` directory on port 1989.

use env_logger::Env;
use log::error;

use microfile_rs::{FileServer, ServerConfig};

#[tokio::main]
async fn main() {
    // Default to info so the banner and listening URL are visible
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let server = FileServer::new(ServerConfig::default());

    if let Err(e) = server.start().await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
