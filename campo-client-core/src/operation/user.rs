//! User operations.
//!
//! `GetUserByEmail` is deliberately unscoped: login happens before a tenant
//! exists. Registration is one nested insert creating the user and their
//! property in a single round trip.

use serde::{Deserialize, Serialize};

use super::{MutationOperation, Operation, OperationName, QueryOperation};
use crate::model::{PropertyId, User, UserId, UserRow};

pub(super) const GET_USER_BY_EMAIL: &str = r#"
query GetUserByEmail($email: String!) {
  usuarios(where: { email: { _eq: $email } }, limit: 1) {
    id
    nome
    email
    senha
    propriedade_id
  }
}
"#;

pub(super) const REGISTER_USER: &str = r#"
mutation RegisterUser($nome: String!, $email: String!, $senha: String!, $nome_propriedade: String!) {
  insert_usuarios_one(object: {
    nome: $nome
    email: $email
    senha: $senha
    propriedade: { data: { nome: $nome_propriedade } }
  }) {
    id
    nome
    email
    propriedade_id
  }
}
"#;

pub(super) const UPDATE_USER: &str = r#"
mutation UpdateUser($id: uuid!, $changes: usuarios_set_input!) {
  update_usuarios_by_pk(pk_columns: { id: $id }, _set: $changes) {
    id
    nome
    email
    propriedade_id
  }
}
"#;

/// The stored row for an email, credential column included, for the
/// client-side login comparison.
pub struct GetUserByEmail;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetUserByEmailVariables {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRows {
    pub usuarios: Vec<UserRow>,
}

impl Operation for GetUserByEmail {
    const NAME: OperationName = OperationName::GetUserByEmail;
    type Variables = GetUserByEmailVariables;
    type Data = UserRows;
}

impl QueryOperation for GetUserByEmail {}

pub struct RegisterUser;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserVariables {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub nome_propriedade: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub insert_usuarios_one: User,
}

impl Operation for RegisterUser {
    const NAME: OperationName = OperationName::RegisterUser;
    type Variables = RegisterUserVariables;
    type Data = RegisteredUser;
}

impl MutationOperation for RegisterUser {
    // A fresh registration changes who exists and which properties exist.
    const INVALIDATES: &'static [OperationName] =
        &[OperationName::GetUserByEmail, OperationName::ListProperties];
}

pub struct UpdateUser;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserVariables {
    pub id: UserId,
    pub changes: UserChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedUser {
    pub update_usuarios_by_pk: Option<User>,
}

impl Operation for UpdateUser {
    const NAME: OperationName = OperationName::UpdateUser;
    type Variables = UpdateUserVariables;
    type Data = UpdatedUser;
}

impl MutationOperation for UpdateUser {
    const INVALIDATES: &'static [OperationName] = &[OperationName::GetUserByEmail];
}
