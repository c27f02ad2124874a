// API type definitions module
// JSON bodies returned by the classification endpoints

use serde::{Deserialize, Serialize};

/// Fixed readiness body served on `/`
pub const READINESS_BODY: &str = r#"{"message": "Number Classification API is running"}"#;

/// Successful classification of a number
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: i64,
    pub fun_fact: String,
}

/// Rejected request, echoing the raw input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub number: String,
    pub error: bool,
}

impl ErrorResult {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            error: true,
        }
    }
}

/// Body for unknown paths
#[derive(Debug, Clone, Serialize)]
pub struct NotFound {
    pub error: &'static str,
}

impl Default for NotFound {
    fn default() -> Self {
        Self { error: "Not Found" }
    }
}
