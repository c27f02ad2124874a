//! Number classification endpoint
//!
//! validate method -> parse `number` -> cache lookup -> compute + fetch -> cache store -> respond

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};
use std::sync::Arc;
use tokio::task::JoinError;

use crate::api::ClassificationResult;
use crate::classifier;
use crate::config::AppState;
use crate::error::ClassifyError;
use crate::funfact::FunFactSource;
use crate::http;
use crate::logger::{self, CacheStatus};

/// Query parameter carrying the number to classify
pub const NUMBER_PARAM: &str = "number";

/// Handle `/api/classify-number`
///
/// Returns the response and, when the cache is enabled and the request got
/// that far, whether it was served from the cache.
pub async fn handle_classify(
    method: &Method,
    query: Option<&str>,
    state: &AppState,
) -> (Response<Full<Bytes>>, Option<CacheStatus>) {
    let cors_origin = state.config.http.cors_origin.as_str();

    let number = match parse_request(method, query) {
        Ok(number) => number,
        Err(e) => {
            logger::log_warning(&format!("Rejected classification request: {e}"));
            return (
                http::build_json_response(e.status(), &e.to_body(), cors_origin),
                None,
            );
        }
    };

    if let Some(cache) = &state.cache {
        if let Some(hit) = cache.get(number).await {
            logger::log_cache_hit(number);
            return (
                http::build_json_response(StatusCode::OK, hit.as_ref(), cors_origin),
                Some(CacheStatus::Hit),
            );
        }
    }

    let result = match classify_number(number, state.fun_facts.as_ref()).await {
        Ok(result) => result,
        Err(e) => {
            return (
                http::build_json_response(e.status(), &e.to_body(), cors_origin),
                None,
            );
        }
    };
    let (result, cache_status) = match &state.cache {
        Some(cache) => {
            let stored = cache.insert(result).await;
            logger::log_cache_store(number, cache.len().await);
            (stored, Some(CacheStatus::Miss))
        }
        None => (Arc::new(result), None),
    };

    (
        http::build_json_response(StatusCode::OK, result.as_ref(), cors_origin),
        cache_status,
    )
}

/// Validate the method and extract the number to classify
pub fn parse_request(method: &Method, query: Option<&str>) -> Result<i64, ClassifyError> {
    if method != Method::GET {
        return Err(ClassifyError::MethodNotAllowed);
    }

    let raw = http::first_param(query, NUMBER_PARAM).unwrap_or_default();
    if raw.is_empty() {
        return Err(ClassifyError::MissingNumber);
    }

    raw.parse::<i64>()
        .map_err(|_| ClassifyError::InvalidNumber(raw))
}

/// Run the trial-division work on the blocking pool while the fun fact is fetched
async fn classify_number(
    number: i64,
    fun_facts: &dyn FunFactSource,
) -> Result<ClassificationResult, ClassifyError> {
    let compute = tokio::task::spawn_blocking(move || classifier::classify(number, String::new()));
    let (fun_fact, computed) = tokio::join!(fun_facts.fetch(number), compute);
    attach_fun_fact(number, computed, fun_fact)
}

/// A failed classification task is reported, not retried inline
fn attach_fun_fact(
    number: i64,
    computed: Result<ClassificationResult, JoinError>,
    fun_fact: String,
) -> Result<ClassificationResult, ClassifyError> {
    let mut result = computed.map_err(|e| {
        logger::log_error(&format!("Classification task failed for {number}: {e}"));
        ClassifyError::ComputationFailed(number)
    })?;
    result.fun_fact = fun_fact;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::testing::{body_string, test_state};
    use std::sync::atomic::Ordering;

    #[test]
    fn test_parse_request() {
        assert_eq!(parse_request(&Method::GET, Some("number=371")), Ok(371));
        assert_eq!(parse_request(&Method::GET, Some("number=-8")), Ok(-8));
        assert_eq!(parse_request(&Method::GET, Some("number=%2B8")), Ok(8));
        // A bare '+' decodes to a space
        assert_eq!(
            parse_request(&Method::GET, Some("number=+8")),
            Err(ClassifyError::InvalidNumber(" 8".to_string()))
        );
        assert_eq!(
            parse_request(&Method::POST, Some("number=371")),
            Err(ClassifyError::MethodNotAllowed)
        );
        assert_eq!(
            parse_request(&Method::GET, None),
            Err(ClassifyError::MissingNumber)
        );
        assert_eq!(
            parse_request(&Method::GET, Some("number=")),
            Err(ClassifyError::MissingNumber)
        );
        assert_eq!(
            parse_request(&Method::GET, Some("number=1.5")),
            Err(ClassifyError::InvalidNumber("1.5".to_string()))
        );
        assert_eq!(
            parse_request(&Method::GET, Some("number=99999999999999999999")),
            Err(ClassifyError::InvalidNumber("99999999999999999999".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_number_is_400() {
        let (state, facts) = test_state(true);
        let (response, cache) = handle_classify(&Method::GET, Some("number=abc"), &state).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(cache.is_none());
        assert_eq!(body_string(response).await, r#"{"number":"abc","error":true}"#);
        assert_eq!(facts.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_number_is_400() {
        let (state, _) = test_state(true);
        let (response, _) = handle_classify(&Method::GET, None, &state).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, r#"{"number":"","error":true}"#);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let (state, _) = test_state(true);
        let (response, _) = handle_classify(&Method::POST, Some("number=6"), &state).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "https://*, http://");
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(
            body_string(response).await,
            r#"{"number":"Invalid request method","error":true}"#
        );
    }

    #[tokio::test]
    async fn test_classifies_number() {
        let (state, _) = test_state(true);
        let (response, cache) = handle_classify(&Method::GET, Some("number=28"), &state).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache, Some(CacheStatus::Miss));
        assert_eq!(
            body_string(response).await,
            r#"{"number":28,"is_prime":false,"is_perfect":true,"properties":["even"],"digit_sum":10,"fun_fact":"fact #1 about 28"}"#
        );
    }

    #[tokio::test]
    async fn test_failed_classification_task_is_500() {
        let computed = tokio::task::spawn_blocking(|| -> ClassificationResult {
            panic!("classification panicked")
        })
        .await;
        assert!(computed.is_err());

        let err = attach_fun_fact(42, computed, "fact".to_string()).unwrap_err();
        assert_eq!(err, ClassifyError::ComputationFailed(42));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_string(&err.to_body()).unwrap(),
            r#"{"number":"42","error":true}"#
        );
    }

    #[test]
    fn test_attach_fun_fact_keeps_computed_fields() {
        let computed = Ok(classifier::classify(153, String::new()));
        let result = attach_fun_fact(153, computed, "fact".to_string()).unwrap();
        assert_eq!(result.properties, vec!["armstrong", "odd"]);
        assert_eq!(result.fun_fact, "fact");
    }

    #[tokio::test]
    async fn test_cache_hit_skips_fetch() {
        let (state, facts) = test_state(true);
        let (first, _) = handle_classify(&Method::GET, Some("number=153"), &state).await;
        let (second, cache) = handle_classify(&Method::GET, Some("number=153"), &state).await;

        assert_eq!(cache, Some(CacheStatus::Hit));
        assert_eq!(body_string(first).await, body_string(second).await);
        assert_eq!(facts.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_without_cache_fetches_every_time() {
        let (state, facts) = test_state(false);
        let (first, cache) = handle_classify(&Method::GET, Some("number=153"), &state).await;
        let (second, _) = handle_classify(&Method::GET, Some("number=153"), &state).await;

        assert!(cache.is_none());
        assert_ne!(body_string(first).await, body_string(second).await);
        assert_eq!(facts.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_store_one_entry() {
        let (state, facts) = test_state(true);
        let state = Arc::new(state);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let state = Arc::clone(&state);
            handles.push(tokio::spawn(async move {
                let (response, _) = handle_classify(&Method::GET, Some("number=496"), &state).await;
                body_string(response).await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let cache = state.cache.as_ref().unwrap();
        assert_eq!(cache.len().await, 1);
        assert!(facts.calls.load(Ordering::SeqCst) >= 1);

        let (after, cache_status) = handle_classify(&Method::GET, Some("number=496"), &state).await;
        assert_eq!(cache_status, Some(CacheStatus::Hit));
        let stored = serde_json::to_string(cache.get(496).await.unwrap().as_ref()).unwrap();
        assert_eq!(body_string(after).await, stored);
    }
}
