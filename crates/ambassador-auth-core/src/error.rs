//! Auth errors

use ambassador_types::ValidationError;
use thiserror::Error;

use crate::password::PasswordError;
use crate::token::TokenError;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, invalid or expired session, or a session for a deleted user
    #[error("unauthorized")]
    Unauthenticated,

    /// Valid identity whose role does not grant the resource
    #[error("forbidden")]
    Forbidden { resource: String },

    /// Stored credential could not be parsed
    #[error("stored credential is corrupt")]
    CorruptHash,

    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Target user does not exist
    #[error("user not found")]
    UserNotFound,

    /// Another account already uses the email
    #[error("email already registered")]
    EmailTaken,

    /// Database error
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::Unauthenticated => 401,
            Self::Forbidden { .. } => 403,
            Self::UserNotFound => 404,
            Self::EmailTaken => 409,
            Self::Validation(_) => 400,
            Self::CorruptHash
            | Self::StorageUnavailable(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Whether this is an authentication/authorization denial rather than a fault
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::Unauthenticated | Self::Forbidden { .. }
        )
    }
}

impl From<ambassador_db::DbError> for AuthError {
    fn from(err: ambassador_db::DbError) -> Self {
        match err {
            ambassador_db::DbError::Conflict(constraint) => {
                tracing::debug!(%constraint, "Email already registered");
                Self::EmailTaken
            }
            other => {
                tracing::error!("Database error: {}", other);
                Self::StorageUnavailable(other.to_string())
            }
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(reason) => Self::Internal(format!("token signing failed: {reason}")),
            other => {
                tracing::debug!(error = %other, "Session token rejected");
                Self::Unauthenticated
            }
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::CorruptHash => Self::CorruptHash,
            PasswordError::Hashing(reason) => Self::Internal(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::Unauthenticated.status_code(), 401);
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(
            AuthError::Forbidden {
                resource: "users".to_string()
            }
            .status_code(),
            403
        );
        assert_eq!(AuthError::CorruptHash.status_code(), 500);
        assert_eq!(AuthError::EmailTaken.status_code(), 409);
        assert_eq!(
            AuthError::Validation(ValidationError::PasswordMismatch).status_code(),
            400
        );
    }

    #[test]
    fn test_token_failures_become_unauthenticated() {
        for err in [TokenError::Malformed, TokenError::BadSignature, TokenError::Expired] {
            assert!(matches!(AuthError::from(err), AuthError::Unauthenticated));
        }
        assert!(matches!(
            AuthError::from(TokenError::Signing("no key".to_string())),
            AuthError::Internal(_)
        ));
    }

    #[test]
    fn test_unique_violation_is_not_a_storage_fault() {
        let err = AuthError::from(ambassador_db::DbError::Conflict("users_email_key".to_string()));
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(err.to_string(), "email already registered");

        let err = AuthError::from(ambassador_db::DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, AuthError::StorageUnavailable(_)));
    }

    #[test]
    fn test_denials() {
        assert!(AuthError::Unauthenticated.is_denial());
        assert!(!AuthError::CorruptHash.is_denial());
        assert!(!AuthError::StorageUnavailable("down".to_string()).is_denial());
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AuthError::from(ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "passwords do not match");
    }
}
