//! Route table: immutable (method, exact path) to fixed-response mapping.
//!
//! Built once at startup and never mutated afterwards; concurrent handlers
//! read it without locks.

use hyper::body::Bytes;
use hyper::{Method, StatusCode};

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// The fixed (status, content type, body) triple served for a route.
#[derive(Debug, Clone)]
pub struct StaticResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    /// `Bytes` so per-request clones are refcount bumps, not copies.
    pub body: Bytes,
}

impl StaticResponse {
    #[must_use]
    pub const fn text(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: Bytes::from_static(body.as_bytes()),
        }
    }
}

/// A registered (HTTP method, exact path) entry.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub response: StaticResponse,
}

/// Exact-match route table with a catch-all fallback.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    not_found: StaticResponse,
}

impl RouteTable {
    #[must_use]
    pub const fn new(not_found: StaticResponse) -> Self {
        Self {
            routes: Vec::new(),
            not_found,
        }
    }

    pub fn register(&mut self, method: Method, path: &'static str, response: StaticResponse) {
        self.routes.push(Route {
            method,
            path,
            response,
        });
    }

    /// The benchmark table: two GET endpoints plus the catch-all.
    #[must_use]
    pub fn benchmark() -> Self {
        let mut table = Self::new(StaticResponse::text(StatusCode::NOT_FOUND, "not found"));
        table.register(
            Method::GET,
            "/health",
            StaticResponse::text(StatusCode::OK, "ok"),
        );
        table.register(
            Method::GET,
            "/index",
            StaticResponse::text(StatusCode::OK, "hello from gin server"),
        );
        table
    }

    /// Look up the response for a request. Total: any miss, including a
    /// method mismatch on a registered path, yields the catch-all response.
    #[must_use]
    pub fn lookup(&self, method: &Method, path: &str) -> &StaticResponse {
        self.routes
            .iter()
            .find(|route| route.method == *method && route.path == path)
            .map_or(&self.not_found, |route| &route.response)
    }

    /// Registered entries, in registration order. Used for the startup banner.
    pub fn entries(&self) -> impl Iterator<Item = (&Method, &'static str)> {
        self.routes.iter().map(|route| (&route.method, route.path))
    }
}
