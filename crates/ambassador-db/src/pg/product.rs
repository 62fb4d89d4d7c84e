//! PostgreSQL product repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::ProductRow;
use crate::repo::{CreateProduct, Paginatable, ProductRepository, UpdateProduct};

/// PostgreSQL product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<ProductRow>> {
        let product = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, description, image, price, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn create(&self, product: CreateProduct) -> DbResult<ProductRow> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (title, description, image, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, image, price, created_at, updated_at
            "#,
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, update: UpdateProduct) -> DbResult<Option<ProductRow>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                price = COALESCE($5, price),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, image, price, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.image)
        .bind(update.price)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Paginatable for PgProductRepository {
    type Record = ProductRow;

    async fn count(&self) -> DbResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn take(&self, limit: i64, offset: i64) -> DbResult<Vec<ProductRow>> {
        let products = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, description, image, price, created_at, updated_at
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
