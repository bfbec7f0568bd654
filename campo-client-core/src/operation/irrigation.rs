//! Irrigation operations. Runs are append-only in the application, so there
//! is no update: a wrong record is deleted and re-entered.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{Irrigation, IrrigationId, PropertyId, SectorId};

pub(super) const LIST_IRRIGATIONS: &str = r#"
query ListIrrigations($propriedade_id: uuid!) {
  irrigacoes(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { data: desc }) {
    id
    propriedade_id
    setor_id
    data
    volume_litros
    duracao_minutos
  }
}
"#;

pub(super) const INSERT_IRRIGATION: &str = r#"
mutation InsertIrrigation($setor_id: uuid, $data: date!, $volume_litros: numeric, $duracao_minutos: Int, $propriedade_id: uuid!) {
  insert_irrigacoes_one(object: {
    setor_id: $setor_id
    data: $data
    volume_litros: $volume_litros
    duracao_minutos: $duracao_minutos
    propriedade_id: $propriedade_id
  }) {
    id
    propriedade_id
    setor_id
    data
    volume_litros
    duracao_minutos
  }
}
"#;

pub(super) const DELETE_IRRIGATION: &str = r#"
mutation DeleteIrrigation($id: uuid!) {
  delete_irrigacoes_by_pk(id: $id) {
    id
    propriedade_id
    data
  }
}
"#;

/// Irrigation runs of the current property, newest first.
pub struct ListIrrigations;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListIrrigationsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrrigationList {
    pub irrigacoes: Vec<Irrigation>,
}

impl Operation for ListIrrigations {
    const NAME: OperationName = OperationName::ListIrrigations;
    type Variables = ListIrrigationsVariables;
    type Data = IrrigationList;
}

impl QueryOperation for ListIrrigations {}

pub struct InsertIrrigation;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertIrrigationVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setor_id: Option<SectorId>,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_litros: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracao_minutos: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedIrrigation {
    pub insert_irrigacoes_one: Irrigation,
}

impl Operation for InsertIrrigation {
    const NAME: OperationName = OperationName::InsertIrrigation;
    type Variables = InsertIrrigationVariables;
    type Data = InsertedIrrigation;
}

impl MutationOperation for InsertIrrigation {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListIrrigations];
}

pub struct DeleteIrrigation;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteIrrigationVariables {
    pub id: IrrigationId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedIrrigation {
    pub delete_irrigacoes_by_pk: Option<Irrigation>,
}

impl Operation for DeleteIrrigation {
    const NAME: OperationName = OperationName::DeleteIrrigation;
    type Variables = DeleteIrrigationVariables;
    type Data = DeletedIrrigation;
}

impl MutationOperation for DeleteIrrigation {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListIrrigations];
}

property_scoped!(ListIrrigationsVariables, InsertIrrigationVariables);
