//! Core types for the Campo data-access layer.
//!
//! This crate is I/O free: it holds the GraphQL wire types, the operation
//! registry (the closed set of documents the application dispatches), the
//! domain records, and the error taxonomy. The transport, the request cache
//! and the session live in `campo-client`.

mod error;
pub mod model;
pub mod operation;
mod request;
mod response;

pub use error::*;
pub use operation::{
    MutationOperation, Operation, OperationKind, OperationName, PropertyScoped, QueryOperation,
};
pub use request::*;
pub use response::*;
