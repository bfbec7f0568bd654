//! Tenant scoping over the client facade.
//!
//! Nearly every read and insert is scoped to the property the session is
//! logged into. Call sites go through [`ScopedClient`] instead of threading
//! the id themselves; while nobody is logged in, scoped dispatch is
//! disabled rather than sent unfiltered.

use campo_client_core::{FetchError, MutationOperation, PropertyScoped, QueryOperation};

use crate::auth::AuthSession;
use crate::client::CampoClient;

/// Result of a scoped dispatch. `Disabled` means no property is selected:
/// nothing was sent, and nothing will be until a session exists.
#[derive(Clone, Debug, PartialEq)]
pub enum Scoped<T> {
    Disabled,
    Ready(T),
}

impl<T> Scoped<T> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Scoped::Disabled)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Scoped::Ready(value) => Some(value),
            Scoped::Disabled => None,
        }
    }
}

/// Wraps the client so tenant-scoped operations carry the session's
/// property id without every call site remembering to.
#[derive(Clone)]
pub struct ScopedClient {
    client: CampoClient,
    session: AuthSession,
}

impl ScopedClient {
    pub fn new(client: CampoClient, session: AuthSession) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &CampoClient {
        &self.client
    }

    pub async fn query<O>(&self, variables: O::Variables) -> Result<Scoped<O::Data>, FetchError>
    where
        O: QueryOperation,
        O::Variables: PropertyScoped,
    {
        match self.scope(variables) {
            None => Ok(Scoped::Disabled),
            Some(variables) => self.client.query::<O>(variables).await.map(Scoped::Ready),
        }
    }

    pub async fn mutate<O>(&self, variables: O::Variables) -> Result<Scoped<O::Data>, FetchError>
    where
        O: MutationOperation,
        O::Variables: PropertyScoped,
    {
        match self.scope(variables) {
            None => Ok(Scoped::Disabled),
            Some(variables) => self.client.mutate::<O>(variables).await.map(Scoped::Ready),
        }
    }

    /// Fill the dedicated tenant field unless the caller already did.
    fn scope<V: PropertyScoped>(&self, mut variables: V) -> Option<V> {
        if variables.propriedade_id().is_none() {
            variables.set_propriedade_id(self.session.propriedade_id()?);
        }
        Some(variables)
    }
}
