//! HTTP response building, decoupled from routing.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::logger;
use crate::routes::StaticResponse;

/// Build a hyper response from a fixed route response.
///
/// Builder failure is unreachable for the values in the route table; it is
/// logged and degrades to a bare response rather than panicking.
pub fn build_static_response(fixed: &StaticResponse) -> Response<Full<Bytes>> {
    Response::builder()
        .status(fixed.status)
        .header("Content-Type", fixed.content_type)
        .body(Full::new(fixed.body.clone()))
        .unwrap_or_else(|e| {
            logger::log_build_error(fixed.status.as_u16(), &e);
            Response::new(Full::new(fixed.body.clone()))
        })
}
