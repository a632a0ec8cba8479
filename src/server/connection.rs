// Connection handling
// Serves each accepted stream as an HTTP/1.1 connection on its own task.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::ServerContext;
use crate::handler;
use crate::logger;

/// Accept one connection and hand it off to a spawned serving task.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, ctx: &Arc<ServerContext>) {
    if ctx.config.access_log {
        logger::log_connection_accepted(&peer_addr);
    }
    handle_connection(stream, peer_addr, Arc::clone(ctx));
}

/// Serve one connection until the client closes it.
///
/// Keep-alive stays enabled since benchmark load generators reuse
/// connections, so one task handles many requests over its lifetime.
/// Handlers share only the immutable `ServerContext`.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, ctx: Arc<ServerContext>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&ctx), peer_addr)),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
