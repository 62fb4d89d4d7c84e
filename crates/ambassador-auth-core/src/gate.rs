//! Authorization gate
//!
//! Every protected endpoint resolves its caller here: the session token is
//! validated, the user and its role are loaded fresh, and the role's
//! permission set is checked against the endpoint's resource name. Nothing
//! is cached between requests, so deletions and role changes take effect on
//! the next call.

use std::sync::Arc;

use ambassador_db::{UserRepository, UserRow, UserWithRole};
use ambassador_types::{Role, User, UserId};

use crate::token::TokenCodec;
use crate::AuthError;

/// An authenticated caller and its current role
#[derive(Debug, Clone)]
pub struct Principal {
    pub user: UserRow,
    pub role: Role,
}

impl Principal {
    pub fn user_id(&self) -> UserId {
        self.user.user_id()
    }

    /// Whether the caller's role grants `resource`
    pub fn allows(&self, resource: &str) -> bool {
        self.role.allows(resource)
    }

    /// Public view with the role attached
    pub fn to_user(&self) -> User {
        User::from(self.user.clone()).with_role(self.role.clone())
    }
}

impl From<UserWithRole> for Principal {
    fn from(joined: UserWithRole) -> Self {
        Self {
            user: joined.user,
            role: joined.role.into(),
        }
    }
}

/// Resolves session tokens to principals and enforces resource permissions
pub struct AccessGate<U: UserRepository> {
    codec: Arc<TokenCodec>,
    users: Arc<U>,
}

impl<U: UserRepository> AccessGate<U> {
    pub fn new(codec: Arc<TokenCodec>, users: Arc<U>) -> Self {
        Self { codec, users }
    }

    /// Resolve the caller behind a session token
    ///
    /// A missing token, a token that fails validation, and a token for a
    /// user that no longer exists are all `Unauthenticated`. Storage
    /// failures propagate as storage errors.
    pub async fn authenticate(&self, token: Option<&str>) -> Result<Principal, AuthError> {
        let token = token.ok_or(AuthError::Unauthenticated)?;
        let user_id = self.codec.validate(token)?;

        let joined = self.users.find_with_role(user_id.0).await?.ok_or_else(|| {
            tracing::debug!(user_id = %user_id, "Session refers to a missing user");
            AuthError::Unauthenticated
        })?;

        Ok(joined.into())
    }

    /// Resolve the caller and require that its role grants `resource`
    pub async fn authorize(
        &self,
        token: Option<&str>,
        resource: &str,
    ) -> Result<Principal, AuthError> {
        let principal = self.authenticate(token).await?;

        if !principal.allows(resource) {
            tracing::info!(
                user_id = %principal.user_id(),
                role = %principal.role.name,
                resource,
                "Access denied"
            );
            return Err(AuthError::Forbidden {
                resource: resource.to_string(),
            });
        }

        Ok(principal)
    }
}
