//! Pest occurrence operations.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{LotId, Pest, PestId, PropertyId};

pub(super) const LIST_PESTS: &str = r#"
query ListPests($propriedade_id: uuid!) {
  pragas(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { data_ocorrencia: desc }) {
    id
    nome
    propriedade_id
    lote_id
    descricao
    data_ocorrencia
    tratamento
  }
}
"#;

pub(super) const INSERT_PEST: &str = r#"
mutation InsertPest($nome: String!, $lote_id: uuid, $descricao: String, $data_ocorrencia: date, $tratamento: String, $propriedade_id: uuid!) {
  insert_pragas_one(object: {
    nome: $nome
    lote_id: $lote_id
    descricao: $descricao
    data_ocorrencia: $data_ocorrencia
    tratamento: $tratamento
    propriedade_id: $propriedade_id
  }) {
    id
    nome
    propriedade_id
    lote_id
    descricao
    data_ocorrencia
    tratamento
  }
}
"#;

pub(super) const UPDATE_PEST: &str = r#"
mutation UpdatePest($id: uuid!, $changes: pragas_set_input!) {
  update_pragas_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    propriedade_id
    lote_id
    descricao
    data_ocorrencia
    tratamento
  }
}
"#;

pub(super) const DELETE_PEST: &str = r#"
mutation DeletePest($id: uuid!) {
  delete_pragas_by_pk(id: $id) {
    id
    nome
    propriedade_id
  }
}
"#;

/// Pest records of the current property, most recent occurrence first.
pub struct ListPests;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPestsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PestList {
    pub pragas: Vec<Pest>,
}

impl Operation for ListPests {
    const NAME: OperationName = OperationName::ListPests;
    type Variables = ListPestsVariables;
    type Data = PestList;
}

impl QueryOperation for ListPests {}

pub struct InsertPest;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertPestVariables {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<LotId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_ocorrencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedPest {
    pub insert_pragas_one: Pest,
}

impl Operation for InsertPest {
    const NAME: OperationName = OperationName::InsertPest;
    type Variables = InsertPestVariables;
    type Data = InsertedPest;
}

impl MutationOperation for InsertPest {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListPests];
}

pub struct UpdatePest;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatePestVariables {
    pub id: PestId,
    pub changes: PestChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PestChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<LotId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_ocorrencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamento: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedPest {
    pub update_pragas_by_pk: Option<Pest>,
}

impl Operation for UpdatePest {
    const NAME: OperationName = OperationName::UpdatePest;
    type Variables = UpdatePestVariables;
    type Data = UpdatedPest;
}

impl MutationOperation for UpdatePest {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListPests];
}

pub struct DeletePest;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletePestVariables {
    pub id: PestId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedPest {
    pub delete_pragas_by_pk: Option<Pest>,
}

impl Operation for DeletePest {
    const NAME: OperationName = OperationName::DeletePest;
    type Variables = DeletePestVariables;
    type Data = DeletedPest;
}

impl MutationOperation for DeletePest {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListPests];
}

property_scoped!(ListPestsVariables, InsertPestVariables);
