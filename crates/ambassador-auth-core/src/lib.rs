//! Ambassador Auth Core - Authentication business logic
//!
//! Core authentication functionality: password hashing, signed session
//! tokens, the per-resource authorization gate, and the account flows
//! (register, login, profile and password changes) built on top of them.

pub mod config;
pub mod error;
pub mod gate;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use gate::{AccessGate, Principal};
pub use password::{hash_password, verify_password, PasswordError};
pub use service::{AuthService, SignedIn};
pub use token::{IssuedToken, SessionClaims, TokenCodec, TokenError};
