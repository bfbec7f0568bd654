//! Property (tenant) operations. These are the one family that is not
//! scoped by a property id: they manage the tenant records themselves.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{Property, PropertyId};

pub(super) const LIST_PROPERTIES: &str = r#"
query ListProperties {
  propriedades(order_by: { nome: asc }) {
    id
    nome
    area_total
    localizacao
  }
}
"#;

pub(super) const GET_PROPERTY: &str = r#"
query GetProperty($id: uuid!) {
  propriedades_by_pk(id: $id) {
    id
    nome
    area_total
    localizacao
  }
}
"#;

pub(super) const INSERT_PROPERTY: &str = r#"
mutation InsertProperty($nome: String!, $area_total: numeric, $localizacao: String) {
  insert_propriedades_one(object: {
    nome: $nome
    area_total: $area_total
    localizacao: $localizacao
  }) {
    id
    nome
    area_total
    localizacao
  }
}
"#;

pub(super) const UPDATE_PROPERTY: &str = r#"
mutation UpdateProperty($id: uuid!, $changes: propriedades_set_input!) {
  update_propriedades_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    area_total
    localizacao
  }
}
"#;

pub(super) const DELETE_PROPERTY: &str = r#"
mutation DeleteProperty($id: uuid!) {
  delete_propriedades_by_pk(id: $id) {
    id
    nome
  }
}
"#;

pub struct ListProperties;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPropertiesVariables {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    pub propriedades: Vec<Property>,
}

impl Operation for ListProperties {
    const NAME: OperationName = OperationName::ListProperties;
    type Variables = ListPropertiesVariables;
    type Data = PropertyList;
}

impl QueryOperation for ListProperties {}

pub struct GetProperty;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetPropertyVariables {
    pub id: PropertyId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyByPk {
    pub propriedades_by_pk: Option<Property>,
}

impl Operation for GetProperty {
    const NAME: OperationName = OperationName::GetProperty;
    type Variables = GetPropertyVariables;
    type Data = PropertyByPk;
}

impl QueryOperation for GetProperty {}

pub struct InsertProperty;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertPropertyVariables {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedProperty {
    pub insert_propriedades_one: Property,
}

impl Operation for InsertProperty {
    const NAME: OperationName = OperationName::InsertProperty;
    type Variables = InsertPropertyVariables;
    type Data = InsertedProperty;
}

impl MutationOperation for InsertProperty {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListProperties];
}

pub struct UpdateProperty;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatePropertyVariables {
    pub id: PropertyId,
    pub changes: PropertyChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedProperty {
    pub update_propriedades_by_pk: Option<Property>,
}

impl Operation for UpdateProperty {
    const NAME: OperationName = OperationName::UpdateProperty;
    type Variables = UpdatePropertyVariables;
    type Data = UpdatedProperty;
}

impl MutationOperation for UpdateProperty {
    const INVALIDATES: &'static [OperationName] =
        &[OperationName::ListProperties, OperationName::GetProperty];
}

pub struct DeleteProperty;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletePropertyVariables {
    pub id: PropertyId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedProperty {
    pub delete_propriedades_by_pk: Option<Property>,
}

impl Operation for DeleteProperty {
    const NAME: OperationName = OperationName::DeleteProperty;
    type Variables = DeletePropertyVariables;
    type Data = DeletedProperty;
}

impl MutationOperation for DeleteProperty {
    const INVALIDATES: &'static [OperationName] =
        &[OperationName::ListProperties, OperationName::GetProperty];
}
