// Server module entry point
// Accept loop plus listener setup and per-connection serving

pub mod connection;
pub mod listener;

pub use listener::create_reusable_listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerContext;
use crate::logger;

/// Accept connections forever, serving each on its own task.
///
/// Accept errors are logged and the loop keeps going; no request affects the
/// server lifecycle. The process runs until killed externally.
pub async fn serve(listener: TcpListener, ctx: Arc<ServerContext>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => connection::accept_connection(stream, peer_addr, &ctx),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
