use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::GraphqlError;

/// Error types for a fetch round trip.
///
/// Every variant carries an explicit kind so callers can decide between
/// retrying and surfacing without matching on message text.
#[derive(Error, Display, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[ignore_extra_doc_attributes]
pub enum FetchError {
    /// HTTP fetch failed: {reason}
    ///
    /// Note that this relates to a transport error and not a GraphQL error.
    TransportError {
        /// The reason the fetch failed.
        reason: String,
    },

    /// Request did not complete within the configured deadline.
    Timeout,

    /// Endpoint rejected the request as unauthorized.
    Unauthorized,

    /// Variables could not be serialized: {reason}
    InvalidVariables {
        /// The reason the serialization failed.
        reason: String,
    },

    /// Response was malformed: {reason}
    MalformedResponse {
        /// The reason the deserialization failed.
        reason: String,
    },

    /// Operation returned GraphQL errors.
    GraphqlErrors {
        /// The errors returned by the endpoint.
        errors: Vec<GraphqlError>,
    },

    /// Response carried neither data nor errors.
    MissingData,
}

impl FetchError {
    /// Whether a retry could plausibly succeed without operator action.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FetchError::TransportError { .. } | FetchError::Timeout
        )
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Unauthorized)
    }

    /// The caller-configured unauthorized special case: a 401-equivalent
    /// result becomes `Ok(None)` instead of propagating.
    pub fn unauthorized_to_none<T>(result: Result<T, FetchError>) -> Result<Option<T>, FetchError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(FetchError::Unauthorized) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Errors raised by the auth session.
///
/// The first two display in the backend's language because they are shown
/// to the end user verbatim.
#[derive(Error, Display, Debug)]
pub enum AuthError {
    /// Usuário não encontrado
    UserNotFound,

    /// Senha incorreta
    WrongPassword,

    /// {0}
    Fetch(#[from] FetchError),

    /// {0}
    Storage(#[from] IdentityStorageError),
}

/// Errors from the persisted identity slot.
#[derive(Error, Display, Debug)]
pub enum IdentityStorageError {
    /// IO error on the identity slot: {0}
    Io(#[from] std::io::Error),

    /// Identity slot held invalid JSON: {0}
    Serialization(#[from] serde_json::Error),
}
