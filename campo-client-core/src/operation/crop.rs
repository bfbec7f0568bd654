//! Crop operations.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{Crop, CropId, PropertyId};

pub(super) const LIST_CROPS: &str = r#"
query ListCrops($propriedade_id: uuid!) {
  culturas(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { nome: asc }) {
    id
    nome
    propriedade_id
    variedade
    ciclo_dias
  }
}
"#;

pub(super) const INSERT_CROP: &str = r#"
mutation InsertCrop($nome: String!, $variedade: String, $ciclo_dias: Int, $propriedade_id: uuid!) {
  insert_culturas_one(object: {
    nome: $nome
    variedade: $variedade
    ciclo_dias: $ciclo_dias
    propriedade_id: $propriedade_id
  }) {
    id
    nome
    propriedade_id
    variedade
    ciclo_dias
  }
}
"#;

pub(super) const UPDATE_CROP: &str = r#"
mutation UpdateCrop($id: uuid!, $changes: culturas_set_input!) {
  update_culturas_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    propriedade_id
    variedade
    ciclo_dias
  }
}
"#;

pub(super) const DELETE_CROP: &str = r#"
mutation DeleteCrop($id: uuid!) {
  delete_culturas_by_pk(id: $id) {
    id
    nome
    propriedade_id
  }
}
"#;

pub struct ListCrops;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCropsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropList {
    pub culturas: Vec<Crop>,
}

impl Operation for ListCrops {
    const NAME: OperationName = OperationName::ListCrops;
    type Variables = ListCropsVariables;
    type Data = CropList;
}

impl QueryOperation for ListCrops {}

pub struct InsertCrop;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertCropVariables {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variedade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciclo_dias: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedCrop {
    pub insert_culturas_one: Crop,
}

impl Operation for InsertCrop {
    const NAME: OperationName = OperationName::InsertCrop;
    type Variables = InsertCropVariables;
    type Data = InsertedCrop;
}

impl MutationOperation for InsertCrop {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListCrops];
}

pub struct UpdateCrop;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateCropVariables {
    pub id: CropId,
    pub changes: CropChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variedade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciclo_dias: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedCrop {
    pub update_culturas_by_pk: Option<Crop>,
}

impl Operation for UpdateCrop {
    const NAME: OperationName = OperationName::UpdateCrop;
    type Variables = UpdateCropVariables;
    type Data = UpdatedCrop;
}

impl MutationOperation for UpdateCrop {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListCrops];
}

pub struct DeleteCrop;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteCropVariables {
    pub id: CropId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedCrop {
    pub delete_culturas_by_pk: Option<Crop>,
}

impl Operation for DeleteCrop {
    const NAME: OperationName = OperationName::DeleteCrop;
    type Variables = DeleteCropVariables;
    type Data = DeletedCrop;
}

impl MutationOperation for DeleteCrop {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListCrops];
}

property_scoped!(ListCropsVariables, InsertCropVariables);
