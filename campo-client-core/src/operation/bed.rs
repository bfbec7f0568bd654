//! Bed operations.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{Bed, BedId, CropId, LotId, PropertyId};

pub(super) const LIST_BEDS: &str = r#"
query ListBeds($propriedade_id: uuid!) {
  canteiros(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { nome: asc }) {
    id
    nome
    lote_id
    propriedade_id
    cultura_id
  }
}
"#;

pub(super) const INSERT_BED: &str = r#"
mutation InsertBed($nome: String!, $lote_id: uuid!, $cultura_id: uuid, $propriedade_id: uuid!) {
  insert_canteiros_one(object: {
    nome: $nome
    lote_id: $lote_id
    cultura_id: $cultura_id
    propriedade_id: $propriedade_id
  }) {
    id
    nome
    lote_id
    propriedade_id
    cultura_id
  }
}
"#;

pub(super) const UPDATE_BED: &str = r#"
mutation UpdateBed($id: uuid!, $changes: canteiros_set_input!) {
  update_canteiros_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    lote_id
    propriedade_id
    cultura_id
  }
}
"#;

pub(super) const DELETE_BED: &str = r#"
mutation DeleteBed($id: uuid!) {
  delete_canteiros_by_pk(id: $id) {
    id
    nome
    lote_id
    propriedade_id
  }
}
"#;

pub struct ListBeds;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListBedsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BedList {
    pub canteiros: Vec<Bed>,
}

impl Operation for ListBeds {
    const NAME: OperationName = OperationName::ListBeds;
    type Variables = ListBedsVariables;
    type Data = BedList;
}

impl QueryOperation for ListBeds {}

pub struct InsertBed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertBedVariables {
    pub nome: String,
    pub lote_id: LotId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedBed {
    pub insert_canteiros_one: Bed,
}

impl Operation for InsertBed {
    const NAME: OperationName = OperationName::InsertBed;
    type Variables = InsertBedVariables;
    type Data = InsertedBed;
}

impl MutationOperation for InsertBed {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListBeds];
}

pub struct UpdateBed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateBedVariables {
    pub id: BedId,
    pub changes: BedChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BedChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<LotId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedBed {
    pub update_canteiros_by_pk: Option<Bed>,
}

impl Operation for UpdateBed {
    const NAME: OperationName = OperationName::UpdateBed;
    type Variables = UpdateBedVariables;
    type Data = UpdatedBed;
}

impl MutationOperation for UpdateBed {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListBeds];
}

pub struct DeleteBed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteBedVariables {
    pub id: BedId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedBed {
    pub delete_canteiros_by_pk: Option<Bed>,
}

impl Operation for DeleteBed {
    const NAME: OperationName = OperationName::DeleteBed;
    type Variables = DeleteBedVariables;
    type Data = DeletedBed;
}

impl MutationOperation for DeleteBed {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListBeds];
}

property_scoped!(ListBedsVariables, InsertBedVariables);
