use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

use crate::operation::OperationName;

/// A JSON object, as found in GraphQL `variables`.
pub type Object = serde_json::Map<String, Value>;

/// A GraphQL request as posted to the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
pub struct Request {
    /// The GraphQL document.
    pub query: String,

    /// The operation to execute when the document holds several.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default)]
    pub operation_name: Option<String>,

    /// The variables object. `null` on the wire deserializes as empty.
    #[serde(
        skip_serializing_if = "Object::is_empty",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    #[builder(default)]
    pub variables: Object,
}

// NOTE: this deserialize helper is used to transform `null` to Default::default()
fn deserialize_null_default<'de, D, T: Default + Deserialize<'de>>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Option<T>>::deserialize(deserializer).map(|x| x.unwrap_or_default())
}

impl Request {
    /// Build the wire request for a registered operation.
    pub fn for_operation(name: OperationName, variables: Object) -> Self {
        Request {
            query: name.document().to_string(),
            operation_name: Some(name.to_string()),
            variables,
        }
    }
}
