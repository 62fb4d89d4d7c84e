//! PostgreSQL repository implementations

mod order;
mod product;
mod role;
mod user;

pub use order::PgOrderRepository;
pub use product::PgProductRepository;
pub use role::PgRoleRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub roles: PgRoleRepository,
    pub products: PgProductRepository,
    pub orders: PgOrderRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            roles: PgRoleRepository::new(pool.clone()),
            products: PgProductRepository::new(pool.clone()),
            orders: PgOrderRepository::new(pool),
        }
    }
}
