//! Campo client: typed data access for the farm-management backend.
//!
//! The layer is thin by design — one GraphQL endpoint, one request per
//! operation — but what the application relies on lives here:
//!
//! * [`CampoClient`] dispatches registered operations and caches query
//!   results by `(operation, variables)` until a mutation's declared
//!   invalidations drop them.
//! * [`ScopedClient`] injects the session's property id into tenant-scoped
//!   operations, and refuses to dispatch while nobody is logged in.
//! * [`AuthSession`] owns login, logout, registration, and the identity
//!   persisted across restarts.
//!
//! The HTTP seam is the [`Fetcher`] trait, so everything above it can be
//! exercised against a test double.

mod auth;
mod cache;
mod client;
mod configuration;
mod identity;
mod scope;
mod services;

pub use auth::AuthSession;
pub use client::CampoClient;
pub use configuration::{Configuration, ConfigurationError};
pub use identity::IdentityStorage;
pub use scope::{Scoped, ScopedClient};
pub use services::{Fetcher, HttpFetcher};

pub use campo_client_core::{
    AuthError, FetchError, GraphqlError, IdentityStorageError, Location, MutationOperation,
    Operation, OperationKind, OperationName, PropertyScoped, QueryOperation, Request, Response,
};

pub mod prelude {
    //! The traits a call site needs in scope, plus the core modules under
    //! their domain names.
    pub use campo_client_core::model;
    pub use campo_client_core::operation;
    pub use campo_client_core::{MutationOperation, Operation, PropertyScoped, QueryOperation};
}
