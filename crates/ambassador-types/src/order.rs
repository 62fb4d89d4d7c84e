//! Order types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_title: String,
    pub price: f64,
    pub quantity: i32,
}

impl OrderItem {
    /// Line total (price times quantity)
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// An order together with its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Build an order view, deriving the display name and total
    pub fn new(
        id: i64,
        first_name: &str,
        last_name: &str,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
        order_items: Vec<OrderItem>,
    ) -> Self {
        let total = order_items.iter().map(OrderItem::subtotal).sum();
        Self {
            id,
            name: format!("{first_name} {last_name}"),
            email: email.into(),
            total,
            created_at,
            order_items,
        }
    }
}

/// Sales summed over one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    /// `YYYY-MM-DD`
    pub date: String,
    pub sum: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: i32) -> OrderItem {
        OrderItem {
            id: 1,
            order_id: 7,
            product_title: "Mug".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_order_total_sums_items() {
        let order = Order::new(
            7,
            "Grace",
            "Hopper",
            "grace@example.com",
            Utc::now(),
            vec![item(2.5, 4), item(10.0, 1)],
        );
        assert_eq!(order.name, "Grace Hopper");
        assert!((order.total - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_without_items_has_zero_total() {
        let order = Order::new(1, "A", "B", "a@b.c", Utc::now(), vec![]);
        assert_eq!(order.total, 0.0);
    }
}
