//! PostgreSQL order repository implementation

use std::collections::HashMap;

use ambassador_types::Order;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{OrderItemRow, OrderRow, SalesRow};
use crate::repo::{OrderRepository, Paginatable};

/// PostgreSQL order repository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new order repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the items of the given orders, grouped by order ID
    async fn items_for(&self, order_ids: &[i64]) -> DbResult<HashMap<i64, Vec<OrderItemRow>>> {
        let items = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, order_id, product_title, price, quantity
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i64, Vec<OrderItemRow>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn daily_sales(&self) -> DbResult<Vec<SalesRow>> {
        let sales = sqlx::query_as::<_, SalesRow>(
            r#"
            SELECT to_char(o.created_at, 'YYYY-MM-DD') AS date,
                   COALESCE(SUM(oi.price * oi.quantity), 0)::DOUBLE PRECISION AS sum
            FROM orders o
            JOIN order_items oi ON o.id = oi.order_id
            GROUP BY date
            ORDER BY date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }
}

#[async_trait]
impl Paginatable for PgOrderRepository {
    type Record = Order;

    async fn count(&self) -> DbResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn take(&self, limit: i64, offset: i64) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, first_name, last_name, email, created_at
            FROM orders
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let mut items = self.items_for(&ids).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let order_items = items.remove(&order.id).unwrap_or_default();
                order.into_order(order_items)
            })
            .collect())
    }
}
