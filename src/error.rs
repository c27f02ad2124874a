//! Error types
//!
//! [`ServerError`] covers startup failures and is what `main` returns.
//! [`ClassifyError`] covers the user-visible request rejections.

use hyper::StatusCode;
use thiserror::Error;

use crate::api::ErrorResult;

/// Message echoed in the `number` field when the method is rejected
pub const INVALID_METHOD_MESSAGE: &str = "Invalid request method";

/// Startup and runtime failures of the server process
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter '{level}': {source}")]
    LogFilter {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to initialize logging: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid fun fact base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: hyper::http::uri::InvalidUri,
    },
}

/// Reasons a classification request is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("missing number parameter")]
    MissingNumber,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("classification of {0} failed")]
    ComputationFailed(i64),
}

impl ClassifyError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingNumber | Self::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            Self::ComputationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body returned to the client for this rejection
    pub fn to_body(&self) -> ErrorResult {
        match self {
            Self::MethodNotAllowed => ErrorResult::new(INVALID_METHOD_MESSAGE),
            Self::MissingNumber => ErrorResult::new(""),
            Self::InvalidNumber(raw) => ErrorResult::new(raw.as_str()),
            Self::ComputationFailed(number) => ErrorResult::new(number.to_string()),
        }
    }
}
