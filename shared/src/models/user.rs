//! User Model

use serde::{Deserialize, Serialize};

/// User account, scoped to one restaurant
///
/// Orders are attributed to the creating user, but tenant isolation is
/// always keyed by the restaurant, never the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    /// Globally unique
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub is_superadmin: bool,
    pub is_active: bool,
    pub is_confirmed: bool,
    pub created_at: i64,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}
