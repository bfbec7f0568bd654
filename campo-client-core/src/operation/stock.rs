//! Stock operations: products and the movements against them.
//!
//! A product's current level is derived from its movements, so movement
//! writes invalidate the product list as well as their own.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{MovementType, Product, ProductId, PropertyId, StockMovement};

pub(super) const LIST_PRODUCTS: &str = r#"
query ListProducts($propriedade_id: uuid!) {
  produtos(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { nome: asc }) {
    id
    nome
    propriedade_id
    unidade
    quantidade_minima
  }
}
"#;

pub(super) const INSERT_PRODUCT: &str = r#"
mutation InsertProduct($nome: String!, $unidade: String, $quantidade_minima: numeric, $propriedade_id: uuid!) {
  insert_produtos_one(object: {
    nome: $nome
    unidade: $unidade
    quantidade_minima: $quantidade_minima
    propriedade_id: $propriedade_id
  }) {
    id
    nome
    propriedade_id
    unidade
    quantidade_minima
  }
}
"#;

pub(super) const UPDATE_PRODUCT: &str = r#"
mutation UpdateProduct($id: uuid!, $changes: produtos_set_input!) {
  update_produtos_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    propriedade_id
    unidade
    quantidade_minima
  }
}
"#;

pub(super) const DELETE_PRODUCT: &str = r#"
mutation DeleteProduct($id: uuid!) {
  delete_produtos_by_pk(id: $id) {
    id
    nome
    propriedade_id
  }
}
"#;

pub(super) const LIST_STOCK_MOVEMENTS: &str = r#"
query ListStockMovements($propriedade_id: uuid!) {
  movimentacoes_estoque(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { data: desc }) {
    id
    propriedade_id
    produto_id
    tipo
    quantidade
    data
    observacao
  }
}
"#;

pub(super) const INSERT_STOCK_MOVEMENT: &str = r#"
mutation InsertStockMovement($produto_id: uuid!, $tipo: String!, $quantidade: numeric!, $data: date!, $observacao: String, $propriedade_id: uuid!) {
  insert_movimentacoes_estoque_one(object: {
    produto_id: $produto_id
    tipo: $tipo
    quantidade: $quantidade
    data: $data
    observacao: $observacao
    propriedade_id: $propriedade_id
  }) {
    id
    propriedade_id
    produto_id
    tipo
    quantidade
    data
    observacao
  }
}
"#;

pub struct ListProducts;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProductsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub produtos: Vec<Product>,
}

impl Operation for ListProducts {
    const NAME: OperationName = OperationName::ListProducts;
    type Variables = ListProductsVariables;
    type Data = ProductList;
}

impl QueryOperation for ListProducts {}

pub struct InsertProduct;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertProductVariables {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_minima: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedProduct {
    pub insert_produtos_one: Product,
}

impl Operation for InsertProduct {
    const NAME: OperationName = OperationName::InsertProduct;
    type Variables = InsertProductVariables;
    type Data = InsertedProduct;
}

impl MutationOperation for InsertProduct {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListProducts];
}

pub struct UpdateProduct;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductVariables {
    pub id: ProductId,
    pub changes: ProductChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_minima: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedProduct {
    pub update_produtos_by_pk: Option<Product>,
}

impl Operation for UpdateProduct {
    const NAME: OperationName = OperationName::UpdateProduct;
    type Variables = UpdateProductVariables;
    type Data = UpdatedProduct;
}

impl MutationOperation for UpdateProduct {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListProducts];
}

pub struct DeleteProduct;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteProductVariables {
    pub id: ProductId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedProduct {
    pub delete_produtos_by_pk: Option<Product>,
}

impl Operation for DeleteProduct {
    const NAME: OperationName = OperationName::DeleteProduct;
    type Variables = DeleteProductVariables;
    type Data = DeletedProduct;
}

impl MutationOperation for DeleteProduct {
    const INVALIDATES: &'static [OperationName] =
        &[OperationName::ListProducts, OperationName::ListStockMovements];
}

/// Stock movements of the current property, newest first.
pub struct ListStockMovements;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStockMovementsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockMovementList {
    pub movimentacoes_estoque: Vec<StockMovement>,
}

impl Operation for ListStockMovements {
    const NAME: OperationName = OperationName::ListStockMovements;
    type Variables = ListStockMovementsVariables;
    type Data = StockMovementList;
}

impl QueryOperation for ListStockMovements {}

pub struct InsertStockMovement;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertStockMovementVariables {
    pub produto_id: ProductId,
    pub tipo: MovementType,
    pub quantidade: f64,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedStockMovement {
    pub insert_movimentacoes_estoque_one: StockMovement,
}

impl Operation for InsertStockMovement {
    const NAME: OperationName = OperationName::InsertStockMovement;
    type Variables = InsertStockMovementVariables;
    type Data = InsertedStockMovement;
}

impl MutationOperation for InsertStockMovement {
    const INVALIDATES: &'static [OperationName] =
        &[OperationName::ListStockMovements, OperationName::ListProducts];
}

property_scoped!(
    ListProductsVariables,
    InsertProductVariables,
    ListStockMovementsVariables,
    InsertStockMovementVariables,
);
