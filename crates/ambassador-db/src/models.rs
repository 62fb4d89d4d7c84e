//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use ambassador_types::{DailySales, Order, OrderItem, Product, Role, RoleId, User, UserId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User row from the database
#[derive(Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 PHC string; only ever read by the password hasher
    pub password: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for UserRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRow")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role_id", &self.role_id)
            .finish_non_exhaustive()
    }
}

/// Role row from the database
#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: i64,
    pub name: String,
    pub permissions: Vec<String>,
}

/// User joined with its role, loaded in a single query
#[derive(Clone, FromRow)]
pub struct UserWithRoleRow {
    #[sqlx(flatten)]
    pub user: UserRow,
    pub role_name: String,
    pub role_permissions: Vec<String>,
}

/// A user together with the role it references
#[derive(Debug, Clone)]
pub struct UserWithRole {
    pub user: UserRow,
    pub role: RoleRow,
}

impl From<UserWithRoleRow> for UserWithRole {
    fn from(row: UserWithRoleRow) -> Self {
        let role = RoleRow {
            id: row.user.role_id,
            name: row.role_name,
            permissions: row.role_permissions,
        };
        Self {
            user: row.user,
            role,
        }
    }
}

/// Product row from the database
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order row from the database
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Order item row from the database
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub product_title: String,
    pub price: f64,
    pub quantity: i32,
}

/// Aggregated sales for one day
#[derive(Debug, Clone, FromRow)]
pub struct SalesRow {
    pub date: String,
    pub sum: f64,
}

// Conversion implementations from Row types to ambassador-types domain types
impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role_id: RoleId(row.role_id),
            role: None,
        }
    }
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: RoleId(row.id),
            name: row.name,
            permissions: row.permissions,
        }
    }
}

impl From<UserWithRole> for User {
    fn from(joined: UserWithRole) -> Self {
        User::from(joined.user).with_role(joined.role.into())
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            price: row.price,
        }
    }
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            product_title: row.product_title,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

impl OrderRow {
    /// Assemble the domain order from this row and its items
    pub fn into_order(self, items: Vec<OrderItemRow>) -> Order {
        Order::new(
            self.id,
            &self.first_name,
            &self.last_name,
            self.email,
            self.created_at,
            items.into_iter().map(OrderItem::from).collect(),
        )
    }
}

impl From<SalesRow> for DailySales {
    fn from(row: SalesRow) -> Self {
        Self {
            date: row.date,
            sum: row.sum,
        }
    }
}
