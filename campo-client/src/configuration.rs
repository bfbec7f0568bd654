//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use displaydoc::Display;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Configuration for the Campo client.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// The GraphQL endpoint every operation is posted to.
    pub endpoint: Url,

    /// Optional admin secret, forwarded as `x-hasura-admin-secret`.
    #[serde(default)]
    pub admin_secret: Option<String>,

    /// Per-request deadline.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Maximum number of cached query results.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Directory holding the persisted identity slot. Identity stays
    /// in-memory when absent.
    #[serde(default)]
    pub identity_dir: Option<PathBuf>,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_cache_capacity() -> usize {
    512
}

#[buildstructor::buildstructor]
impl Configuration {
    /// Returns a builder for a [`Configuration`]. Only `endpoint` is
    /// required; everything else falls back to the serde defaults.
    #[builder]
    pub fn new(
        endpoint: Url,
        admin_secret: Option<String>,
        timeout: Option<Duration>,
        cache_capacity: Option<usize>,
        identity_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            endpoint,
            admin_secret,
            timeout: timeout.unwrap_or_else(default_timeout),
            cache_capacity: cache_capacity.unwrap_or_else(default_cache_capacity),
            identity_dir,
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(raw).map_err(|error| ConfigurationError::InvalidConfiguration {
            reason: error.to_string(),
        })
    }
}

/// Configuration errors.
#[derive(Error, Display, Debug)]
pub enum ConfigurationError {
    /// Could not parse configuration: {reason}
    InvalidConfiguration { reason: String },

    /// Could not build the HTTP client: {reason}
    HttpClient { reason: String },
}
