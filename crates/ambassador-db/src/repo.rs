//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::*;

/// Capability every listable entity provides to the pagination engine.
///
/// `count` and `take` are independent queries; callers get no snapshot
/// guarantee between them.
#[async_trait]
pub trait Paginatable: Send + Sync {
    /// Record type produced by `take`
    type Record: Send;

    /// Total number of records
    async fn count(&self) -> DbResult<i64>;

    /// At most `limit` records starting after `offset`, in a stable order
    async fn take(&self, limit: i64, offset: i64) -> DbResult<Vec<Self::Record>>;
}

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Find a user together with its role
    async fn find_with_role(&self, id: i64) -> DbResult<Option<UserWithRole>>;

    /// Create a new user
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Apply a partial profile update, returning the updated row
    async fn update_profile(&self, id: i64, update: UpdateProfile) -> DbResult<Option<UserRow>>;

    /// Replace the stored password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> DbResult<()>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: i64) -> DbResult<bool>;
}

/// Create user input
#[derive(Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Already hashed
    pub password_hash: String,
    pub role_id: i64,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("email", &self.email)
            .field("role_id", &self.role_id)
            .finish_non_exhaustive()
    }
}

/// Partial user update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<i64>,
}

/// Role repository trait
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<RoleRow>>;

    /// All roles ordered by ID
    async fn list(&self) -> DbResult<Vec<RoleRow>>;
}

/// Product repository trait
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<ProductRow>>;

    /// Create a new product
    async fn create(&self, product: CreateProduct) -> DbResult<ProductRow>;

    /// Apply a partial update, returning the updated row
    async fn update(&self, id: i64, update: UpdateProduct) -> DbResult<Option<ProductRow>>;

    /// Delete a product; returns whether a row was removed
    async fn delete(&self, id: i64) -> DbResult<bool>;
}

/// Create product input
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

/// Partial product update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

/// Order repository trait
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Sales summed per day, oldest first
    async fn daily_sales(&self) -> DbResult<Vec<SalesRow>>;
}
