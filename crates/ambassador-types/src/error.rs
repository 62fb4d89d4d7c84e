//! Common error types

use thiserror::Error;

/// Request validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or blank
    #[error("{0} is required")]
    Missing(&'static str),

    /// Password and its confirmation differ
    #[error("passwords do not match")]
    PasswordMismatch,

    /// A field was present but unusable
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
