//! Request dispatch: the hyper service behind every connection.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::ServerContext;
use crate::logger::{self, http_version_label, AccessLogEntry};
use crate::response;
use crate::routes::RouteTable;

/// Handle one request: exact-match route lookup, fixed response.
///
/// Touches no shared mutable state and performs no I/O besides writing the
/// response (plus the optional access-log line).
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: Arc<ServerContext>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if !ctx.config.access_log {
        return Ok(dispatch(&ctx.routes, req.method(), req.uri().path()));
    }

    let start = Instant::now();
    let fixed = ctx.routes.lookup(req.method(), req.uri().path());

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = http_version_label(req.version());
    entry.referer = header_str(&req, "referer");
    entry.user_agent = header_str(&req, "user-agent");
    entry.status = fixed.status.as_u16();
    entry.body_bytes = fixed.body.len();

    let resp = response::build_static_response(fixed);

    entry.request_time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry, "combined");

    Ok(resp)
}

/// The pure lookup-to-response step, shared by the service and unit tests.
#[must_use]
pub fn dispatch(routes: &RouteTable, method: &Method, path: &str) -> Response<Full<Bytes>> {
    response::build_static_response(routes.lookup(method, path))
}

fn header_str<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}
