//! The client facade: cached reads, writes with declarative invalidation.

use std::sync::Arc;

use campo_client_core::{
    FetchError, MutationOperation, Operation, OperationName, QueryOperation, Request,
    Response,
};
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheKey, Entry, QueryCache};
use crate::configuration::{Configuration, ConfigurationError};
use crate::services::{Fetcher, HttpFetcher};

/// The process-wide client. Cloning is cheap; clones share the cache.
#[derive(Clone)]
pub struct CampoClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    fetcher: Box<dyn Fetcher>,
    cache: QueryCache,
}

impl CampoClient {
    pub fn new(configuration: &Configuration) -> Result<Self, ConfigurationError> {
        let fetcher = HttpFetcher::new(configuration)?;
        Ok(Self::with_fetcher(
            Box::new(fetcher),
            configuration.cache_capacity,
        ))
    }

    /// Build a client over any fetcher. This is how tests slot a double in.
    pub fn with_fetcher(fetcher: Box<dyn Fetcher>, cache_capacity: usize) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                fetcher,
                cache: QueryCache::new(cache_capacity),
            }),
        }
    }

    /// Dispatch a query. The result is cached by `(operation, variables)`
    /// and served from the cache until a mutation invalidates it; identical
    /// concurrent reads share a single upstream request.
    pub async fn query<O: QueryOperation>(
        &self,
        variables: O::Variables,
    ) -> Result<O::Data, FetchError> {
        let key = CacheKey::new(O::NAME, &variables)?;
        match self.inner.cache.entry(key).await {
            Entry::Hit(value) => decode::<O>(value),
            Entry::Wait(mut receiver) => {
                let outcome = receiver.recv().await.map_err(|_| {
                    FetchError::TransportError {
                        reason: "deduplicated request was abandoned".to_string(),
                    }
                })?;
                decode::<O>(outcome?)
            }
            Entry::Miss(guard) => match self.execute(O::NAME, &variables).await {
                Ok(value) => {
                    guard.publish(value.clone()).await;
                    decode::<O>(value)
                }
                Err(error) => {
                    guard.publish_error(error.clone()).await;
                    Err(error)
                }
            },
        }
    }

    /// Dispatch a mutation. Never cached; once the write lands, every query
    /// the operation declares in `INVALIDATES` is dropped from the cache so
    /// the next read refetches.
    pub async fn mutate<O: MutationOperation>(
        &self,
        variables: O::Variables,
    ) -> Result<O::Data, FetchError> {
        let value = self.execute(O::NAME, &variables).await?;
        for name in O::INVALIDATES {
            self.inner.cache.invalidate(*name).await;
        }
        decode::<O>(value)
    }

    /// Manual invalidation, for the rare flow outside the declared graph.
    pub async fn invalidate(&self, name: OperationName) {
        self.inner.cache.invalidate(name).await;
    }

    async fn execute(
        &self,
        name: OperationName,
        variables: &impl Serialize,
    ) -> Result<Value, FetchError> {
        let variables =
            serde_json::to_value(variables).map_err(|error| FetchError::InvalidVariables {
                reason: error.to_string(),
            })?;
        let variables = match variables {
            Value::Object(object) => object,
            Value::Null => Default::default(),
            other => {
                return Err(FetchError::InvalidVariables {
                    reason: format!("variables must serialize to an object, got {other}"),
                })
            }
        };

        let request = Request::for_operation(name, variables);
        let response = self.inner.fetcher.fetch(request).await?;
        data_or_error(response)
    }
}

fn data_or_error(response: Response) -> Result<Value, FetchError> {
    if !response.errors.is_empty() {
        return Err(FetchError::GraphqlErrors {
            errors: response.errors,
        });
    }
    match response.data {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(FetchError::MissingData),
    }
}

fn decode<O: Operation>(value: Value) -> Result<O::Data, FetchError> {
    serde_json::from_value(value).map_err(|error| FetchError::MalformedResponse {
        reason: format!("{} payload: {error}", O::NAME),
    })
}

#[cfg(test)]
mod tests {
    use campo_client_core::GraphqlError;

    use super::*;

    #[test]
    fn graphql_errors_win_over_partial_data() {
        let response = Response {
            data: Some(serde_json::json!({ "setores": [] })),
            errors: vec![GraphqlError {
                message: "validation failed".to_string(),
                ..Default::default()
            }],
        };
        assert!(matches!(
            data_or_error(response),
            Err(FetchError::GraphqlErrors { .. })
        ));
    }

    #[test]
    fn null_data_is_missing_data() {
        let response = Response {
            data: Some(Value::Null),
            errors: vec![],
        };
        assert!(matches!(data_or_error(response), Err(FetchError::MissingData)));
    }
}
