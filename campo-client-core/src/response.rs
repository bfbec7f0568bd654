use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::request::Object;

/// A GraphQL response body: the standard `data`/`errors` convention.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Response {
    /// The response data, absent when the operation failed outright.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// The GraphQL errors encountered, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl Response {
    /// Deserialize a response body, surfacing garbage as a malformed-response error.
    pub fn from_bytes(body: &[u8]) -> Result<Response, FetchError> {
        serde_json::from_slice(body).map_err(|error| FetchError::MalformedResponse {
            reason: error.to_string(),
        })
    }
}

/// A [GraphQL error](https://spec.graphql.org/October2021/#sec-Errors)
/// as found in the `errors` field of a [`Response`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphqlError {
    /// The error message.
    pub message: String,

    /// The locations of the error in the originating document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,

    /// If this is a field error, the path to that field in [`Response::data`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,

    /// The optional GraphQL extensions for this error.
    #[serde(skip_serializing_if = "Object::is_empty")]
    pub extensions: Object,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The error location.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The line number.
    pub line: u32,

    /// The column number.
    pub column: u32,
}
