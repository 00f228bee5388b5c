use shared::models::{PlanTier, Restaurant};
use sqlx::{Executor, Sqlite};

#[allow(clippy::too_many_arguments)]
pub async fn create(
    ex: impl Executor<'_, Database = Sqlite>,
    name: &str,
    slug: &str,
    address: &str,
    phone: &str,
    currency: &str,
    timezone: &str,
    plan: PlanTier,
    api_key: &str,
    now: i64,
) -> Result<Restaurant, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO restaurants (name, slug, address, phone, currency, timezone, plan, api_key, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(name)
    .bind(slug)
    .bind(address)
    .bind(phone)
    .bind(currency)
    .bind(timezone)
    .bind(plan)
    .bind(api_key)
    .bind(now)
    .fetch_one(ex)
    .await
}

pub async fn find_by_id(
    ex: impl Executor<'_, Database = Sqlite>,
    id: i64,
) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM restaurants WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn find_by_slug(
    ex: impl Executor<'_, Database = Sqlite>,
    slug: &str,
) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM restaurants WHERE slug = ?")
        .bind(slug)
        .fetch_optional(ex)
        .await
}

/// API-key lookup for the public print-client endpoint.
///
/// Disabled restaurants are filtered here so a revoked tenant's key stops
/// working without touching the key itself.
pub async fn find_active_by_api_key(
    ex: impl Executor<'_, Database = Sqlite>,
    api_key: &str,
) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM restaurants WHERE api_key = ? AND is_active = 1")
        .bind(api_key)
        .fetch_optional(ex)
        .await
}

pub async fn set_active(
    ex: impl Executor<'_, Database = Sqlite>,
    id: i64,
    active: bool,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE restaurants SET is_active = ? WHERE id = ?")
        .bind(active)
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}

pub async fn has_orders(
    ex: impl Executor<'_, Database = Sqlite>,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE restaurant_id = ?")
        .bind(id)
        .fetch_one(ex)
        .await?;
    Ok(count > 0)
}

pub async fn delete(
    ex: impl Executor<'_, Database = Sqlite>,
    id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
