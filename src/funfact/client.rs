//! HTTP fun fact client
//!
//! Plain-HTTP GET of `{base_url}/{number}/math`. The response status is not
//! inspected; whatever body comes back is the fact.

use std::time::Duration;

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::Uri;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use super::{FunFactSource, READ_ERROR, UNAVAILABLE};
use crate::config::FunFactConfig;
use crate::error::ServerError;
use crate::logger;

/// Fun fact source backed by the numbers API
#[derive(Clone)]
pub struct HttpFunFactSource {
    client: Client<HttpConnector, Empty<Bytes>>,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpFunFactSource {
    /// Build a client, rejecting base URLs that cannot form a request URI
    pub fn new(config: &FunFactConfig) -> Result<Self, ServerError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        format!("{base_url}/0/math")
            .parse::<Uri>()
            .map_err(|source| ServerError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            base_url,
            timeout: config.timeout(),
        })
    }

    pub fn url_for(&self, number: i64) -> String {
        format!("{}/{number}/math", self.base_url)
    }

    async fn request(&self, number: i64) -> String {
        let url = self.url_for(number);
        let uri: Uri = match url.parse() {
            Ok(uri) => uri,
            Err(e) => {
                logger::log_upstream_failure(&url, &e);
                return UNAVAILABLE.to_string();
            }
        };

        let response = match self.client.get(uri).await {
            Ok(response) => response,
            Err(e) => {
                logger::log_upstream_failure(&url, &e);
                return UNAVAILABLE.to_string();
            }
        };

        match response.into_body().collect().await {
            Ok(body) => String::from_utf8_lossy(&body.to_bytes()).into_owned(),
            Err(e) => {
                logger::log_upstream_failure(&url, &e);
                READ_ERROR.to_string()
            }
        }
    }
}

#[async_trait]
impl FunFactSource for HttpFunFactSource {
    async fn fetch(&self, number: i64) -> String {
        let Some(limit) = self.timeout else {
            return self.request(number).await;
        };
        match tokio::time::timeout(limit, self.request(number)).await {
            Ok(fact) => fact,
            Err(elapsed) => {
                logger::log_upstream_failure(&self.url_for(number), &elapsed);
                UNAVAILABLE.to_string()
            }
        }
    }
}
