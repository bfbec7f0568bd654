//! HTTP fetcher for the GraphQL endpoint.

use std::fmt::Debug;

use async_trait::async_trait;
use campo_client_core::{FetchError, Request, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::configuration::{Configuration, ConfigurationError};

const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// A fetcher turns a GraphQL request into a response.
///
/// The goal of this trait is to hide the transport: the cache and the
/// session are exercised against a test double through the same seam the
/// production client uses.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    async fn fetch(&self, request: Request) -> Result<Response, FetchError>;
}

/// Production fetcher: one POST per call, no retry.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl HttpFetcher {
    /// Construct a new fetcher that will post to the configured endpoint.
    pub fn new(configuration: &Configuration) -> Result<Self, ConfigurationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(secret) = &configuration.admin_secret {
            let value = HeaderValue::from_str(secret).map_err(|error| {
                ConfigurationError::InvalidConfiguration {
                    reason: format!("admin secret is not a valid header value: {error}"),
                }
            })?;
            headers.insert(ADMIN_SECRET_HEADER, value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(configuration.timeout)
            .default_headers(headers)
            .build()
            .map_err(|error| ConfigurationError::HttpClient {
                reason: error.to_string(),
            })?;

        Ok(Self {
            http_client,
            endpoint: configuration.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: Request) -> Result<Response, FetchError> {
        tracing::debug!(
            operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
            "posting operation to {}",
            self.endpoint
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FetchError::Unauthorized);
        }

        let body = response.bytes().await.map_err(classify)?;
        tracing::trace!(
            operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
            status = %status,
            "received {} response bytes",
            body.len()
        );

        match Response::from_bytes(&body) {
            Ok(parsed) => Ok(parsed),
            // A GraphQL endpoint answers errors as JSON even on non-2xx
            // statuses; anything else is the transport talking.
            Err(_) if !status.is_success() => Err(FetchError::TransportError {
                reason: format!("HTTP status {status}"),
            }),
            Err(error) => Err(error),
        }
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::TransportError {
            reason: error.to_string(),
        }
    }
}
