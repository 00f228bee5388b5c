//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Belongs to exactly one restaurant. `is_active = false` is a soft delete:
/// the product disappears from new-order selection lists but stays
/// referenced by historical line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    /// Unit price in cents
    pub price_cents: i64,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price_cents: i64,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}
