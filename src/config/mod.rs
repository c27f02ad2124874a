// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, FunFactConfig};

/// Default config file, looked up with any supported extension
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the optional file,
    /// then `NUMCLASS__SECTION__KEY` environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, Self::environment())
    }

    /// `NUMCLASS__SECTION__KEY` variables, e.g. `NUMCLASS__SERVER__PORT=9000`
    fn environment() -> config::Environment {
        config::Environment::with_prefix("NUMCLASS")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("http.cors_origin", "https://*, http://")?
            .set_default("http.keep_alive", true)?
            .set_default("fun_fact.base_url", "http://numbersapi.com")?
            .set_default("fun_fact.timeout_secs", 10)?
            .set_default("cache.enabled", true)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Load from the path given as first CLI argument, or the default file
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}

impl FunFactConfig {
    /// Upstream deadline, `None` when disabled
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}
