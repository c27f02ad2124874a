//! HTTP protocol utilities module
//!
//! Response builders and query string helpers, decoupled from request dispatch.

pub mod query;
pub mod response;

pub use query::first_param;
pub use response::{build_404_response, build_json_response, build_readiness_response};
