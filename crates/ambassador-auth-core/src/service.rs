//! Auth service - account flows on top of the password hasher, token codec
//! and authorization gate

use std::sync::Arc;

use ambassador_db::{CreateUser, UpdateProfile, UserRepository, UserRow};
use ambassador_types::{
    CreateUserRequest, LoginRequest, RegisterRequest, Secret, UpdatePasswordRequest,
    UpdateProfileRequest, UserId,
};

use crate::{
    config::AuthConfig,
    gate::{AccessGate, Principal},
    password,
    token::{IssuedToken, TokenCodec},
    AuthError,
};

/// A user together with the session token just issued for it
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: UserRow,
    pub token: IssuedToken,
}

/// Authentication service
///
/// Provides unified interface for:
/// - Registration and login
/// - Session token resolution and resource authorization
/// - Profile and password changes
/// - Administrative account creation
pub struct AuthService<U: UserRepository> {
    config: AuthConfig,
    codec: Arc<TokenCodec>,
    gate: AccessGate<U>,
    user_repo: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, user_repo: Arc<U>) -> Self {
        let codec = Arc::new(TokenCodec::from_config(&config));

        Self {
            gate: AccessGate::new(Arc::clone(&codec), Arc::clone(&user_repo)),
            codec,
            user_repo,
            config,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    // =========================================================================
    // Credentials
    // =========================================================================

    /// Register a new account and sign it in
    ///
    /// Password confirmation is checked before anything is hashed or stored.
    pub async fn register(&self, request: RegisterRequest) -> Result<SignedIn, AuthError> {
        let account = request.validate()?;
        let password_hash = hash(account.password).await?;

        let user = self
            .user_repo
            .create(CreateUser {
                first_name: account.first_name,
                last_name: account.last_name,
                email: account.email,
                password_hash,
                role_id: self.config.default_role_id,
            })
            .await?;

        tracing::info!(user_id = %user.user_id(), "Registered new account");

        let token = self.codec.issue(user.user_id())?;
        Ok(SignedIn { user, token })
    }

    /// Check credentials and issue a session
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, request: LoginRequest) -> Result<SignedIn, AuthError> {
        let attempt = request.validate().map_err(|_| AuthError::InvalidCredentials)?;

        let Some(user) = self.user_repo.find_by_email(&attempt.email).await? else {
            tracing::debug!("Login for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        match verify(attempt.password, user.password.clone()).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(user_id = %user.user_id(), "Login with wrong password");
                return Err(AuthError::InvalidCredentials);
            }
            Err(AuthError::CorruptHash) => {
                tracing::error!(user_id = %user.user_id(), "Stored password hash is corrupt");
                return Err(AuthError::CorruptHash);
            }
            Err(e) => return Err(e),
        }

        let token = self.codec.issue(user.user_id())?;
        tracing::debug!(user_id = %user.user_id(), "Session issued");
        Ok(SignedIn { user, token })
    }

    // =========================================================================
    // Authorization
    // =========================================================================

    /// Resolve the caller behind a session token
    pub async fn authenticate(&self, token: Option<&str>) -> Result<Principal, AuthError> {
        self.gate.authenticate(token).await
    }

    /// Resolve the caller and require access to `resource`
    pub async fn authorize(
        &self,
        token: Option<&str>,
        resource: &str,
    ) -> Result<Principal, AuthError> {
        self.gate.authorize(token, resource).await
    }

    // =========================================================================
    // Account changes
    // =========================================================================

    /// Update the caller's own profile; role changes are ignored
    pub async fn update_info(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<UserRow, AuthError> {
        let request = request.validate()?.without_role();
        self.update_user(user_id, request).await
    }

    /// Apply a profile update, including role, to any user
    pub async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<UserRow, AuthError> {
        let request = request.validate()?;
        let update = UpdateProfile {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            role_id: request.role_id,
        };

        self.user_repo
            .update_profile(user_id.0, update)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Replace the caller's password
    pub async fn update_password(
        &self,
        user_id: UserId,
        request: UpdatePasswordRequest,
    ) -> Result<(), AuthError> {
        let password = request.validate()?;
        let password_hash = hash(password).await?;

        self.user_repo
            .update_password(user_id.0, &password_hash)
            .await?;

        tracing::info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Create an account on behalf of an administrator
    ///
    /// The account gets the configured initial password and, unless one is
    /// given, the default role.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserRow, AuthError> {
        let new_user = request.validate()?;
        let password_hash = hash(Secret::new(self.config.default_user_password.clone())).await?;
        let role_id = new_user
            .role_id
            .map(|r| r.0)
            .unwrap_or(self.config.default_role_id);

        let user = self
            .user_repo
            .create(CreateUser {
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                email: new_user.email,
                password_hash,
                role_id,
            })
            .await?;

        tracing::info!(user_id = %user.user_id(), role_id, "Account created by administrator");
        Ok(user)
    }
}

async fn hash(password: Secret) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || password::hash_password(password.expose()))
        .await
        .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))?
        .map_err(AuthError::from)
}

async fn verify(password: Secret, stored: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || password::verify_password(password.expose(), &stored))
        .await
        .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))?
        .map_err(AuthError::from)
}
