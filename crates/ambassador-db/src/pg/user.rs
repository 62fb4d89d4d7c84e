//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{UserRow, UserWithRole, UserWithRoleRow};
use crate::repo::{CreateUser, Paginatable, UpdateProfile, UserRepository};

/// PostgreSQL user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, password, role_id,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, password, role_id,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_with_role(&self, id: i64) -> DbResult<Option<UserWithRole>> {
        let row = sqlx::query_as::<_, UserWithRoleRow>(
            r#"
            SELECT u.id, u.first_name, u.last_name, u.email, u.password, u.role_id,
                   u.created_at, u.updated_at,
                   r.name AS role_name, r.permissions AS role_permissions
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserWithRole::from))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (first_name, last_name, email, password, role_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, password, role_id,
                      created_at, updated_at
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_profile(&self, id: i64, update: UpdateProfile) -> DbResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                role_id = COALESCE($5, role_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, password, role_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.email)
        .bind(update.role_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> DbResult<()> {
        sqlx::query("UPDATE users SET password = $1, updated_at = NOW() WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Paginatable for PgUserRepository {
    type Record = UserRow;

    async fn count(&self) -> DbResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn take(&self, limit: i64, offset: i64) -> DbResult<Vec<UserRow>> {
        let users = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, password, role_id,
                   created_at, updated_at
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
