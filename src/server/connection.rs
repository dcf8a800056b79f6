// Connection module
// Serves a single accepted TCP connection over HTTP/1.1

use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger;

/// Upper bound on reads from a connection.
const READ_TIMEOUT: Duration = Duration::from_secs(5);
/// Upper bound on writes to a connection.
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Serve one connection in a spawned task.
///
/// The connection future is bounded by the larger of the read and write
/// timeouts; a connection exceeding the bound is dropped at the server
/// layer and the handler never observes it.
pub fn serve_connection(stream: TcpStream) {
    tokio::spawn(drive_connection(
        stream,
        std::cmp::max(READ_TIMEOUT, WRITE_TIMEOUT),
    ));
}

/// Drive the HTTP/1.1 connection to completion or until `timeout_duration`
/// elapses.
async fn drive_connection(stream: TcpStream, timeout_duration: Duration) {
    let io = TokioIo::new(stream);

    let conn = http1::Builder::new().serve_connection(io, service_fn(handler::handle_request));

    match tokio::time::timeout(timeout_duration, conn).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => logger::log_connection_error(&err),
        Err(_) => logger::log_connection_timeout(timeout_duration.as_secs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn idle_connection_is_closed_after_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut client = TcpStream::connect(addr).await.unwrap();
        let (server_side, _) = listener.accept().await.unwrap();

        // Client sends nothing; the server must give up on its own.
        let started = tokio::time::Instant::now();
        drive_connection(server_side, Duration::from_millis(100)).await;
        assert!(started.elapsed() < Duration::from_secs(1));

        // The server dropped the connection, so the client sees EOF.
        let mut buf = [0u8; 16];
        let read = client.read(&mut buf).await.unwrap();
        assert_eq!(read, 0);
    }
}
