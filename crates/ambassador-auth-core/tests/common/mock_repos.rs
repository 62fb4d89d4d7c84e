//! Mock repositories for testing

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use ambassador_auth_core::AuthConfig;
use ambassador_db::{
    CreateUser, DbError, DbResult, RoleRow, UpdateProfile, UserRepository, UserRow, UserWithRole,
};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

pub const ADMIN: i64 = 1;
pub const EDITOR: i64 = 2;
pub const VIEWER: i64 = 3;

/// Config with a fixed secret and the viewer role as default
#[allow(dead_code)]
pub fn test_config() -> AuthConfig {
    AuthConfig::try_new("test-secret-test-secret-test-secret!")
        .unwrap()
        .with_default_role_id(VIEWER)
}

/// In-memory user and role store for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<i64, UserRow>>,
    by_email: Arc<DashMap<String, i64>>,
    roles: Arc<DashMap<i64, RoleRow>>,
    next_id: Arc<AtomicI64>,
    offline: Arc<AtomicBool>,
}

impl Default for MockUserRepository {
    fn default() -> Self {
        let repo = Self {
            users: Arc::default(),
            by_email: Arc::default(),
            roles: Arc::default(),
            next_id: Arc::new(AtomicI64::new(1)),
            offline: Arc::default(),
        };
        repo.insert_role(ADMIN, "Admin", &["users", "roles", "products", "orders"]);
        repo.insert_role(EDITOR, "Editor", &["products", "orders"]);
        repo.insert_role(VIEWER, "Viewer", &["orders"]);
        repo
    }
}

#[allow(dead_code)]
impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a role
    pub fn insert_role(&self, id: i64, name: &str, permissions: &[&str]) {
        self.roles.insert(
            id,
            RoleRow {
                id,
                name: name.to_string(),
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            },
        );
    }

    /// Insert a test user directly
    pub fn insert_user(&self, user: UserRow) {
        self.by_email.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
    }

    /// Overwrite a stored password hash without going through the hasher
    pub fn set_raw_password(&self, id: i64, stored: &str) {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.password = stored.to_string();
        }
    }

    /// Make every call fail as if the database were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn get(&self, id: i64) -> Option<UserRow> {
        self.users.get(&id).map(|r| r.value().clone())
    }

    fn check_online(&self) -> DbResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// Mirrors the `users.email` unique constraint
    fn check_email_free(&self, email: &str, owner: Option<i64>) -> DbResult<()> {
        match self.by_email.get(email) {
            Some(id) if Some(*id.value()) != owner => {
                Err(DbError::Conflict("users_email_key".to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>> {
        self.check_online()?;
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        self.check_online()?;
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn find_with_role(&self, id: i64) -> DbResult<Option<UserWithRole>> {
        self.check_online()?;
        // Inner join: a user whose role is gone does not resolve
        let Some(user) = self.get(id) else {
            return Ok(None);
        };
        Ok(self
            .roles
            .get(&user.role_id)
            .map(|r| UserWithRole {
                user,
                role: r.value().clone(),
            }))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        self.check_online()?;
        self.check_email_free(&user.email, None)?;
        let now = Utc::now();
        let row = UserRow {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password_hash,
            role_id: user.role_id,
            created_at: now,
            updated_at: now,
        };
        self.insert_user(row.clone());
        Ok(row)
    }

    async fn update_profile(&self, id: i64, update: UpdateProfile) -> DbResult<Option<UserRow>> {
        self.check_online()?;
        if let Some(email) = &update.email {
            self.check_email_free(email, Some(id))?;
        }
        let Some(mut entry) = self.users.get_mut(&id) else {
            return Ok(None);
        };
        let user = entry.value_mut();
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.by_email.remove(&user.email);
            self.by_email.insert(email.clone(), id);
            user.email = email;
        }
        if let Some(role_id) = update.role_id {
            user.role_id = role_id;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> DbResult<()> {
        self.check_online()?;
        if let Some(mut user) = self.users.get_mut(&id) {
            user.password = password_hash.to_string();
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        self.check_online()?;
        match self.users.remove(&id) {
            Some((_, user)) => {
                self.by_email.remove(&user.email);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
