//! Roles and the resource names they grant

use serde::{Deserialize, Serialize};

/// Unique role identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub i64);

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RoleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Resource names checked by the authorization gate
pub mod resource {
    pub const USERS: &str = "users";
    pub const ROLES: &str = "roles";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
}

/// A named permission set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// Resource names this role may access, in administration order
    pub permissions: Vec<String>,
}

impl Role {
    /// Whether this role grants access to `resource`.
    ///
    /// Matching is exact; `"user"` does not grant `"users"`.
    pub fn allows(&self, resource: &str) -> bool {
        self.permissions.iter().any(|p| p == resource)
    }
}
