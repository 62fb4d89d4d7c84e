//! Catalogue types

use serde::{Deserialize, Serialize};

/// A catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}
