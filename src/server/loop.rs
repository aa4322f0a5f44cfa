// Server loop module
// Accepts connections until the process is terminated

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::Config;
use crate::logger;

/// Accept loop; never returns under normal operation.
///
/// Accept errors are logged and the loop continues with the next connection.
pub async fn start_server_loop(listener: TcpListener, config: Arc<Config>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &config),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
