//! Sector operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{CropId, PropertyId, Sector, SectorId};

pub(super) const LIST_SECTORS: &str = r#"
query ListSectors($propriedade_id: uuid!) {
  setores(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { nome: asc }) {
    id
    nome
    propriedade_id
    area
    coordenadas
    cultura_id
  }
}
"#;

pub(super) const INSERT_SECTOR: &str = r#"
mutation InsertSector($nome: String!, $area: numeric, $coordenadas: jsonb, $cultura_id: uuid, $propriedade_id: uuid!) {
  insert_setores_one(object: {
    nome: $nome
    area: $area
    coordenadas: $coordenadas
    cultura_id: $cultura_id
    propriedade_id: $propriedade_id
  }) {
    id
    nome
    propriedade_id
    area
    coordenadas
    cultura_id
  }
}
"#;

pub(super) const UPDATE_SECTOR: &str = r#"
mutation UpdateSector($id: uuid!, $changes: setores_set_input!) {
  update_setores_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    propriedade_id
    area
    coordenadas
    cultura_id
  }
}
"#;

pub(super) const DELETE_SECTOR: &str = r#"
mutation DeleteSector($id: uuid!) {
  delete_setores_by_pk(id: $id) {
    id
    nome
    propriedade_id
  }
}
"#;

/// Sectors of the current property, ordered by name.
pub struct ListSectors;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSectorsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectorList {
    pub setores: Vec<Sector>,
}

impl Operation for ListSectors {
    const NAME: OperationName = OperationName::ListSectors;
    type Variables = ListSectorsVariables;
    type Data = SectorList;
}

impl QueryOperation for ListSectors {}

pub struct InsertSector;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertSectorVariables {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordenadas: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedSector {
    pub insert_setores_one: Sector,
}

impl Operation for InsertSector {
    const NAME: OperationName = OperationName::InsertSector;
    type Variables = InsertSectorVariables;
    type Data = InsertedSector;
}

impl MutationOperation for InsertSector {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListSectors];
}

pub struct UpdateSector;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateSectorVariables {
    pub id: SectorId,
    pub changes: SectorChanges,
}

/// The changed columns; unset fields stay untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordenadas: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedSector {
    pub update_setores_by_pk: Option<Sector>,
}

impl Operation for UpdateSector {
    const NAME: OperationName = OperationName::UpdateSector;
    type Variables = UpdateSectorVariables;
    type Data = UpdatedSector;
}

impl MutationOperation for UpdateSector {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListSectors];
}

pub struct DeleteSector;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteSectorVariables {
    pub id: SectorId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedSector {
    pub delete_setores_by_pk: Option<Sector>,
}

impl Operation for DeleteSector {
    const NAME: OperationName = OperationName::DeleteSector;
    type Variables = DeleteSectorVariables;
    type Data = DeletedSector;
}

impl MutationOperation for DeleteSector {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListSectors];
}

property_scoped!(ListSectorsVariables, InsertSectorVariables);
