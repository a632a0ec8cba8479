//! Configuration from positional command-line arguments.
//!
//! The CLI surface is `program [host] [port]` and nothing else: no flags,
//! no config file, no environment variables. A port argument that does not
//! parse as a valid port number silently keeps the default.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::routes::RouteTable;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Per-request access logging. Off by default: the hot path of a
    /// benchmark server stays silent.
    pub access_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            access_log: false,
        }
    }
}

impl Config {
    /// Build configuration from positional arguments, program name excluded.
    ///
    /// Argument 1 replaces the default host, argument 2 replaces the default
    /// port when it parses; extra arguments are ignored.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut config = Self::default();

        if let Some(host) = args.next() {
            config.host = host;
        }

        if let Some(port) = args.next() {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            }
        }

        config
    }

    /// Resolve the configured host:port into a socket address.
    ///
    /// Uses `ToSocketAddrs` so hostnames work as well as IP literals.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| format!("Invalid address {}:{}: {e}", self.host, self.port))?
            .next()
            .ok_or_else(|| format!("Address {}:{} did not resolve", self.host, self.port))
    }
}

/// Immutable per-process state shared (via `Arc`) with every connection task.
pub struct ServerContext {
    pub config: Config,
    pub routes: RouteTable,
}

impl ServerContext {
    #[must_use]
    pub const fn new(config: Config, routes: RouteTable) -> Self {
        Self { config, routes }
    }
}
