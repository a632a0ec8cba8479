// Listener setup
// Binds TCP listeners with address reuse so a benchmark harness can restart
// the process without waiting out TIME_WAIT.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

const BACKLOG: i32 = 128;

/// Bind a non-blocking TCP listener with `SO_REUSEADDR` and `SO_REUSEPORT`
/// enabled.
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Rebinding the same address works even while sockets from the previous
    // process linger in TIME_WAIT.
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;

    // Tokio requires the socket in non-blocking mode.
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    TcpListener::from_std(socket.into())
}
