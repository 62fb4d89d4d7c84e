//! API request/response types

use serde::{Deserialize, Serialize};

/// `?page=` query parameter for list endpoints
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageQuery {
    /// Page number (1-indexed); absent means the first page
    #[serde(default)]
    pub page: Option<i64>,
}

impl PageQuery {
    /// Requested page, defaulting to 1 when absent
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of records
    pub total: i64,
    /// Current page (1-indexed)
    pub page: i64,
    /// Number of the last page; 0 when there are no records
    pub last_page: i64,
}

/// Paginated response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records in this page
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Convert every record, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Plain `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn success() -> Self {
        Self::new("success")
    }
}
