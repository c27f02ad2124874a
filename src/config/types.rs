// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub fun_fact: FunFactConfig,
    pub cache: CacheConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Subscriber output format (`text` or `json`)
    pub format: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    /// Value of the `Access-Control-Allow-Origin` header on every response
    pub cors_origin: String,
    pub keep_alive: bool,
}

/// Upstream trivia service configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FunFactConfig {
    /// Base URL; requests go to `{base_url}/{number}/math`
    pub base_url: String,
    /// Upstream deadline in seconds, 0 waits forever
    pub timeout_secs: u64,
}

/// Result cache configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
}
