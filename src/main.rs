use std::net::SocketAddr;

mod handler;
mod logger;
mod response;
mod server;

/// Port the server listens on. Fixed at compile time, no flag or
/// environment override.
const PORT: u16 = 7777;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::log_startup_greeting();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));

    // Bind failure (port taken, permission denied) is the only fatal path:
    // log it and exit non-zero, no retry, no fallback port.
    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    logger::log_server_start(PORT);

    server::start_server_loop(listener).await
}
