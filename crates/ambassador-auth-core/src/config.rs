//! Configuration types for auth service

use std::fmt;
use std::time::Duration;

use crate::AuthError;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for session token signing
    pub jwt_secret: String,
    /// Session duration
    pub session_duration: Duration,
    /// Role given to accounts created without an explicit one
    pub default_role_id: i64,
    /// Initial password for accounts created by an administrator
    pub default_user_password: String,
}

impl AuthConfig {
    /// Minimum accepted signing secret length in bytes
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new auth config, rejecting short signing secrets
    pub fn try_new(jwt_secret: impl Into<String>) -> Result<Self, AuthError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "JWT secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                jwt_secret.len()
            )));
        }

        Ok(Self {
            jwt_secret,
            session_duration: Duration::from_secs(24 * 60 * 60), // 24 hours
            default_role_id: 3,
            default_user_password: "1234".to_string(),
        })
    }

    /// Set session duration
    pub fn with_session_duration(mut self, duration: Duration) -> Self {
        self.session_duration = duration;
        self
    }

    /// Set the role assigned when none is given
    pub fn with_default_role_id(mut self, role_id: i64) -> Self {
        self.default_role_id = role_id;
        self
    }

    /// Set the initial password for administrator-created accounts
    pub fn with_default_user_password(mut self, password: impl Into<String>) -> Self {
        self.default_user_password = password.into();
        self
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("session_duration", &self.session_duration)
            .field("default_role_id", &self.default_role_id)
            .field("default_user_password", &"[REDACTED]")
            .finish()
    }
}
