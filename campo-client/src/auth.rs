//! The auth session: login, logout, registration, and the current identity.
//!
//! Authentication is a comparison against the fetched user row; the
//! backend stores the credential and this layer never persists it. What the
//! scoping helper consumes from here is the session's property id.

use std::sync::Arc;

use campo_client_core::model::{PropertyId, User};
use campo_client_core::operation::user::{
    GetUserByEmail, GetUserByEmailVariables, RegisterUser, RegisterUserVariables,
};
use campo_client_core::{AuthError, IdentityStorageError};
use parking_lot::RwLock;

use crate::client::CampoClient;
use crate::identity::IdentityStorage;

/// The session. Cloning is cheap; clones share the identity.
#[derive(Clone)]
pub struct AuthSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    current: RwLock<Option<User>>,
    storage: IdentityStorage,
}

impl AuthSession {
    /// Start a session from whatever identity the slot holds.
    pub fn restore(storage: IdentityStorage) -> Result<Self, IdentityStorageError> {
        let current = storage.read()?;
        if let Some(user) = &current {
            tracing::debug!(user = %user.email, "restored persisted identity");
        }
        Ok(Self {
            inner: Arc::new(SessionInner {
                current: RwLock::new(current),
                storage,
            }),
        })
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.current.read().clone()
    }

    pub fn propriedade_id(&self) -> Option<PropertyId> {
        self.inner
            .current
            .read()
            .as_ref()
            .and_then(|user| user.propriedade_id.clone())
    }

    /// Fetch the row for the email and compare the password. On success the
    /// public profile becomes the session identity and is persisted; on any
    /// failure the persisted identity is left untouched.
    pub async fn login(
        &self,
        client: &CampoClient,
        email: &str,
        senha: &str,
    ) -> Result<User, AuthError> {
        let rows = client
            .query::<GetUserByEmail>(GetUserByEmailVariables {
                email: email.to_string(),
            })
            .await?;

        let row = rows.usuarios.into_iter().next().ok_or(AuthError::UserNotFound)?;
        if row.senha != senha {
            return Err(AuthError::WrongPassword);
        }

        let user = User::from(row);
        self.inner.storage.write(&user)?;
        *self.inner.current.write() = Some(user.clone());
        tracing::debug!(user = %user.email, "login succeeded");
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.inner.storage.clear()?;
        *self.inner.current.write() = None;
        Ok(())
    }

    /// The combined registration: one nested insert creates the user and
    /// their property, then the session behaves as freshly logged in.
    pub async fn register(
        &self,
        client: &CampoClient,
        input: RegisterUserVariables,
    ) -> Result<User, AuthError> {
        let registered = client.mutate::<RegisterUser>(input).await?;
        let user = registered.insert_usuarios_one;
        self.inner.storage.write(&user)?;
        *self.inner.current.write() = Some(user.clone());
        tracing::debug!(user = %user.email, "registration succeeded");
        Ok(user)
    }
}
