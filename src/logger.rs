use std::net::SocketAddr;

pub fn log_startup_greeting() {
    println!("Hello World");
}

pub fn log_server_start(port: u16) {
    println!("Server running on: :{port}");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[Error] Failed to bind {addr}: {err}");
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("[Error] Failed to accept connection: {err}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_connection_timeout(secs: u64) {
    eprintln!("[Warn] Connection timeout after {secs} seconds");
}
