//! Fun fact module
//!
//! Fetches a trivia sentence about a number from an external service.
//! Sources never fail: network and read errors degrade to fixed fallback text.

mod client;

pub use client::HttpFunFactSource;

use async_trait::async_trait;

/// Returned when the upstream cannot be reached or does not answer in time
pub const UNAVAILABLE: &str = "Fun fact unavailable";
/// Returned when the upstream answered but its body could not be read
pub const READ_ERROR: &str = "Error reading fun fact";

/// Source of trivia text for a number
#[async_trait]
pub trait FunFactSource: Send + Sync {
    async fn fetch(&self, number: i64) -> String;
}
