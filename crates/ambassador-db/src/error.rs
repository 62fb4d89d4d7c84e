//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// A unique constraint rejected the write
    #[error("unique constraint violated: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return Self::Conflict(constraint);
            }
        }
        Self::Sqlx(err)
    }
}

/// Result alias for repository operations
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_stay_sqlx() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::Sqlx(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Sqlx(_)
        ));
    }

    #[test]
    fn test_conflict_names_constraint() {
        let err = DbError::Conflict("users_email_key".to_string());
        assert_eq!(err.to_string(), "unique constraint violated: users_email_key");
    }
}
