//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: path dispatch and access logging.

use crate::config::AppState;
use crate::handler::classify;
use crate::http;
use crate::logger::{self, AccessLogEntry, CacheStatus};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Classification endpoint path
pub const CLASSIFY_PATH: &str = "/api/classify-number";
/// Readiness endpoint path
pub const READINESS_PATH: &str = "/";

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let cors_origin = state.config.http.cors_origin.as_str();

    let method = req.method().clone();
    let uri = req.uri().clone();

    let (response, cache) = match uri.path() {
        CLASSIFY_PATH => classify::handle_classify(&method, uri.query(), &state).await,
        READINESS_PATH => (http::build_readiness_response(cors_origin), None),
        _ => (http::build_404_response(cors_origin), None),
    };

    if state.config.logging.access_log {
        let entry = access_entry(&req, remote_addr, &response, cache, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn access_entry<B>(
    req: &Request<B>,
    remote_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    cache: Option<CacheStatus>,
    started: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_str(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry.cache = cache;
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
