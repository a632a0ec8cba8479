//! Static-route HTTP benchmark server.
//!
//! Serves three fixed plain-text responses over hyper, for measuring the
//! baseline request throughput and latency of the serving stack:
//! - `GET /health` responds `ok`
//! - `GET /index` responds `hello from gin server`
//! - everything else responds 404 `not found`
//!
//! The route table is built once at startup and shared read-only by every
//! connection task, so handlers need no synchronization.

pub mod config;
pub mod handler;
pub mod logger;
pub mod response;
pub mod routes;
pub mod server;
