//! Ambassador Types - Shared domain types
//!
//! This crate contains domain types used across the Ambassador admin backend:
//! - User identity and roles
//! - Catalogue and order records
//! - Request shapes and the paginated response envelope

pub mod api;
pub mod error;
pub mod order;
pub mod product;
pub mod request;
pub mod role;
pub mod user;

pub use api::*;
pub use error::*;
pub use order::*;
pub use product::*;
pub use request::*;
pub use role::*;
pub use user::*;
