//! Argon2id password hashing
//!
//! Hashes are stored as self-describing PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so parameters can change
//! without invalidating existing credentials.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use thiserror::Error;

/// Salt length in bytes
const SALT_LEN: usize = 16;

/// Password hashing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Salt generation or hashing failed
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Stored value is not a parseable hash
    #[error("stored password hash is corrupt")]
    CorruptHash,
}

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let mut salt_bytes = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| PasswordError::Hashing(e.to_string()))?;
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| PasswordError::Hashing(e.to_string()))?;

    let phc = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hashing(e.to_string()))?
        .to_string();

    Ok(phc)
}

/// Check a plaintext password against a stored hash
///
/// Returns `Ok(false)` on mismatch. A stored value that cannot be parsed or
/// names an unsupported algorithm is reported as [`PasswordError::CorruptHash`].
pub fn verify_password(plain: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::CorruptHash)?;

    // PHC parsing accepts strings with the salt or output stripped.
    if parsed.salt.is_none() || parsed.hash.is_none() {
        return Err(PasswordError::CorruptHash);
    }

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            Err(PasswordError::CorruptHash)
        }
    }
}
