//! Wire types for the classification API

mod types;

pub use types::{ClassificationResult, ErrorResult, NotFound, READINESS_BODY};
