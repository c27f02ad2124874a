//! HTTP response building module
//!
//! Every response of the service is JSON and carries the configured
//! `Access-Control-Allow-Origin` header, errors included.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::api::{NotFound, READINESS_BODY};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build a JSON response from a pre-serialized body
pub fn build_json_body(status: StatusCode, body: Bytes, cors_origin: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", cors_origin)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Serialize `body` and build a JSON response
///
/// A serialization failure becomes a 500 with an empty object.
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    cors_origin: &str,
) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(json) => build_json_body(status, Bytes::from(json), cors_origin),
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            build_json_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(b"{}"),
                cors_origin,
            )
        }
    }
}

/// Build the fixed readiness response
pub fn build_readiness_response(cors_origin: &str) -> Response<Full<Bytes>> {
    build_json_body(
        StatusCode::OK,
        Bytes::from_static(READINESS_BODY.as_bytes()),
        cors_origin,
    )
}

/// Build 404 Not Found response
pub fn build_404_response(cors_origin: &str) -> Response<Full<Bytes>> {
    build_json_response(StatusCode::NOT_FOUND, &NotFound::default(), cors_origin)
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    const ORIGIN: &str = "https://*, http://";

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_response_headers() {
        let response = build_json_response(StatusCode::OK, &serde_json::json!({"a": 1}), ORIGIN);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], ORIGIN);
        assert_eq!(response.headers()["Content-Type"], JSON_CONTENT_TYPE);
        assert_eq!(body_string(response).await, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_readiness_response() {
        let response = build_readiness_response(ORIGIN);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"message": "Number Classification API is running"}"#
        );
    }

    #[tokio::test]
    async fn test_404_response_is_json() {
        let response = build_404_response(ORIGIN);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["Content-Type"], JSON_CONTENT_TYPE);
        assert_eq!(body_string(response).await, r#"{"error":"Not Found"}"#);
    }
}
