//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - `tracing` subscriber setup (text or JSON output)
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;

pub use format::{AccessLogEntry, CacheStatus};

use crate::config::Config;
use crate::error::ServerError;
use std::fmt::Display;
use std::net::SocketAddr;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Target used for access log lines, filterable with `RUST_LOG=access=off`
pub const ACCESS_TARGET: &str = "access";

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `logging.level`. Should be called once at
/// application startup.
pub fn init(config: &Config) -> Result<(), ServerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.logging.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.logging.format.as_str() {
        "json" => builder.json().finish().try_init(),
        _ => builder.finish().try_init(),
    };
    result.map_err(ServerError::from)
}

/// Filter built from `logging.level`, e.g. `info` or `numclass=debug,access=off`
fn level_filter(level: &str) -> Result<EnvFilter, ServerError> {
    EnvFilter::try_new(level).map_err(|source| ServerError::LogFilter {
        level: level.to_string(),
        source,
    })
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("Number classification server started");
    tracing::info!("Listening on: http://{addr}");
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    tracing::info!("Fun fact upstream: {}", config.fun_fact.base_url);
    match config.fun_fact.timeout() {
        Some(limit) => tracing::info!("Fun fact timeout: {}s", limit.as_secs()),
        None => tracing::info!("Fun fact timeout: disabled"),
    }
    tracing::info!(
        "Result cache: {}",
        if config.cache.enabled { "enabled" } else { "disabled" }
    );
    tracing::info!("======================================");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Upstream trivia request failed; the caller falls back to fixed text
pub fn log_upstream_failure(url: &str, err: &impl Display) {
    tracing::warn!(%url, error = %err, "Fun fact request failed");
}

pub fn log_cache_hit(number: i64) {
    tracing::debug!(number, "Serving cached classification");
}

pub fn log_cache_store(number: i64, entries: usize) {
    tracing::debug!(number, entries, "Stored classification");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    tracing::info!("Shutting down: {reason}");
}
