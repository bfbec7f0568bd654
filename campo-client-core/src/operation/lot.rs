//! Lot operations.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{CropId, Lot, LotId, PropertyId, SectorId};

pub(super) const LIST_LOTS: &str = r#"
query ListLots($propriedade_id: uuid!) {
  lotes(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { nome: asc }) {
    id
    nome
    setor_id
    propriedade_id
    cultura_id
    data_plantio
  }
}
"#;

pub(super) const INSERT_LOT: &str = r#"
mutation InsertLot($nome: String!, $setor_id: uuid!, $cultura_id: uuid, $data_plantio: date, $propriedade_id: uuid!) {
  insert_lotes_one(object: {
    nome: $nome
    setor_id: $setor_id
    cultura_id: $cultura_id
    data_plantio: $data_plantio
    propriedade_id: $propriedade_id
  }) {
    id
    nome
    setor_id
    propriedade_id
    cultura_id
    data_plantio
  }
}
"#;

pub(super) const UPDATE_LOT: &str = r#"
mutation UpdateLot($id: uuid!, $changes: lotes_set_input!) {
  update_lotes_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    setor_id
    propriedade_id
    cultura_id
    data_plantio
  }
}
"#;

pub(super) const DELETE_LOT: &str = r#"
mutation DeleteLot($id: uuid!) {
  delete_lotes_by_pk(id: $id) {
    id
    nome
    setor_id
    propriedade_id
  }
}
"#;

/// Lots of the current property, across all sectors.
pub struct ListLots;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLotsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LotList {
    pub lotes: Vec<Lot>,
}

impl Operation for ListLots {
    const NAME: OperationName = OperationName::ListLots;
    type Variables = ListLotsVariables;
    type Data = LotList;
}

impl QueryOperation for ListLots {}

pub struct InsertLot;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertLotVariables {
    pub nome: String,
    pub setor_id: SectorId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_plantio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedLot {
    pub insert_lotes_one: Lot,
}

impl Operation for InsertLot {
    const NAME: OperationName = OperationName::InsertLot;
    type Variables = InsertLotVariables;
    type Data = InsertedLot;
}

impl MutationOperation for InsertLot {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListLots];
}

pub struct UpdateLot;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateLotVariables {
    pub id: LotId,
    pub changes: LotChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LotChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setor_id: Option<SectorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_plantio: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedLot {
    pub update_lotes_by_pk: Option<Lot>,
}

impl Operation for UpdateLot {
    const NAME: OperationName = OperationName::UpdateLot;
    type Variables = UpdateLotVariables;
    type Data = UpdatedLot;
}

impl MutationOperation for UpdateLot {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListLots];
}

pub struct DeleteLot;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteLotVariables {
    pub id: LotId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedLot {
    pub delete_lotes_by_pk: Option<Lot>,
}

impl Operation for DeleteLot {
    const NAME: OperationName = OperationName::DeleteLot;
    type Variables = DeleteLotVariables;
    type Data = DeletedLot;
}

impl MutationOperation for DeleteLot {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListLots];
}

property_scoped!(ListLotsVariables, InsertLotVariables);
