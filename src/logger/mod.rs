//! Logger module
//!
//! Stdout/stderr logging helpers for the benchmark server:
//! - Startup banner with the listening URL and registered endpoints
//! - Connection and error logging
//! - Access logging with multiple formats

mod format;

pub use format::{http_version_label, AccessLogEntry};

use std::net::SocketAddr;

use crate::routes::RouteTable;

/// Print the startup banner before the accept loop starts, so a benchmark
/// harness can wait on this output to know the server is ready.
pub fn log_server_start(addr: &SocketAddr, routes: &RouteTable) {
    println!("======================================");
    println!("Benchmark server started");
    println!("Listening on: http://{addr}");
    println!("Endpoints:");
    for (method, path) in routes.entries() {
        println!("  {method} http://{addr}{path}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_build_error(status: u16, err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to build {status} response: {err:?}");
}

/// Write one formatted access-log line.
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
