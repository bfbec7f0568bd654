//! Financial transaction operations.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{PropertyId, Transaction, TransactionId, TransactionType};

pub(super) const LIST_TRANSACTIONS: &str = r#"
query ListTransactions($propriedade_id: uuid!) {
  transacoes(where: { propriedade_id: { _eq: $propriedade_id } }, order_by: { data: desc }) {
    id
    propriedade_id
    descricao
    valor
    tipo
    data
    categoria
  }
}
"#;

pub(super) const INSERT_TRANSACTION: &str = r#"
mutation InsertTransaction($descricao: String!, $valor: numeric!, $tipo: String!, $data: date!, $categoria: String, $propriedade_id: uuid!) {
  insert_transacoes_one(object: {
    descricao: $descricao
    valor: $valor
    tipo: $tipo
    data: $data
    categoria: $categoria
    propriedade_id: $propriedade_id
  }) {
    id
    propriedade_id
    descricao
    valor
    tipo
    data
    categoria
  }
}
"#;

pub(super) const UPDATE_TRANSACTION: &str = r#"
mutation UpdateTransaction($id: uuid!, $changes: transacoes_set_input!) {
  update_transacoes_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    propriedade_id
    descricao
    valor
    tipo
    data
    categoria
  }
}
"#;

pub(super) const DELETE_TRANSACTION: &str = r#"
mutation DeleteTransaction($id: uuid!) {
  delete_transacoes_by_pk(id: $id) {
    id
    propriedade_id
    descricao
    valor
    tipo
    data
  }
}
"#;

/// Transactions of the current property, newest first.
pub struct ListTransactions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTransactionsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    pub transacoes: Vec<Transaction>,
}

impl Operation for ListTransactions {
    const NAME: OperationName = OperationName::ListTransactions;
    type Variables = ListTransactionsVariables;
    type Data = TransactionList;
}

impl QueryOperation for ListTransactions {}

pub struct InsertTransaction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertTransactionVariables {
    pub descricao: String,
    pub valor: f64,
    pub tipo: TransactionType,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsertedTransaction {
    pub insert_transacoes_one: Transaction,
}

impl Operation for InsertTransaction {
    const NAME: OperationName = OperationName::InsertTransaction;
    type Variables = InsertTransactionVariables;
    type Data = InsertedTransaction;
}

impl MutationOperation for InsertTransaction {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListTransactions];
}

pub struct UpdateTransaction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionVariables {
    pub id: TransactionId,
    pub changes: TransactionChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedTransaction {
    pub update_transacoes_by_pk: Option<Transaction>,
}

impl Operation for UpdateTransaction {
    const NAME: OperationName = OperationName::UpdateTransaction;
    type Variables = UpdateTransactionVariables;
    type Data = UpdatedTransaction;
}

impl MutationOperation for UpdateTransaction {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListTransactions];
}

pub struct DeleteTransaction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionVariables {
    pub id: TransactionId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedTransaction {
    pub delete_transacoes_by_pk: Option<Transaction>,
}

impl Operation for DeleteTransaction {
    const NAME: OperationName = OperationName::DeleteTransaction;
    type Variables = DeleteTransactionVariables;
    type Data = DeletedTransaction;
}

impl MutationOperation for DeleteTransaction {
    const INVALIDATES: &'static [OperationName] = &[OperationName::ListTransactions];
}

property_scoped!(ListTransactionsVariables, InsertTransactionVariables);
