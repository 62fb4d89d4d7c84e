//! Ambassador DB - Database abstractions
//!
//! SQLx-based database layer for the admin backend, plus the generic
//! pagination engine every list endpoint goes through.
//!
//! # Example
//!
//! ```rust,ignore
//! use ambassador_db::{create_pool, paginate, Repositories};
//!
//! let pool = create_pool("postgres://localhost/ambassador").await?;
//! let repos = Repositories::new(pool);
//!
//! let page = paginate(&repos.products, 2).await?;
//! ```

pub mod error;
pub mod models;
pub mod paginate;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use paginate::{last_page, normalize_page, offset_for, paginate, paginate_with_limit, PAGE_SIZE};
pub use pg::Repositories;
pub use pool::{create_pool, DbPool};
pub use repo::*;
