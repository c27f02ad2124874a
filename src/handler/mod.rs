//! Request handler module
//!
//! Routes requests to the readiness message or the classification endpoint.

pub mod classify;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
