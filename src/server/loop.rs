// Server loop module
// Accepts connections forever and hands each one to the connection layer

use tokio::net::TcpListener;

use super::connection::serve_connection;
use crate::logger;

/// Accept connections until the process is killed.
///
/// A failed accept is logged and skipped, it never terminates the server.
pub async fn start_server_loop(listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                serve_connection(stream);
            }
            Err(e) => {
                logger::log_accept_error(&e);
            }
        }
    }
}
