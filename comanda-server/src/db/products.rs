use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::{Executor, Sqlite};

pub async fn create(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    payload: &ProductCreate,
    now: i64,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO products (restaurant_id, name, price_cents, created_at)
         VALUES (?, ?, ?, ?)
         RETURNING *",
    )
    .bind(restaurant_id)
    .bind(&payload.name)
    .bind(payload.price_cents)
    .bind(now)
    .fetch_one(ex)
    .await
}

/// Active products of one restaurant, in a stable order.
pub async fn list_active(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM products WHERE restaurant_id = ? AND is_active = 1 ORDER BY name, id",
    )
    .bind(restaurant_id)
    .fetch_all(ex)
    .await
}

/// Tenant-scoped lookup. Absent and cross-tenant ids both come back `None`.
///
/// No `is_active` filter: historical line items must keep resolving their
/// product after a soft delete.
pub async fn resolve(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    product_id: i64,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM products WHERE id = ? AND restaurant_id = ?")
        .bind(product_id)
        .bind(restaurant_id)
        .fetch_optional(ex)
        .await
}

pub async fn update(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    product_id: i64,
    payload: &ProductUpdate,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE products SET
            name = COALESCE(?, name),
            price_cents = COALESCE(?, price_cents),
            is_active = COALESCE(?, is_active)
         WHERE id = ? AND restaurant_id = ?
         RETURNING *",
    )
    .bind(&payload.name)
    .bind(payload.price_cents)
    .bind(payload.is_active)
    .bind(product_id)
    .bind(restaurant_id)
    .fetch_optional(ex)
    .await
}

/// Soft delete: the product disappears from selection lists only.
pub async fn deactivate(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    product_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE products SET is_active = 0 WHERE id = ? AND restaurant_id = ?",
    )
    .bind(product_id)
    .bind(restaurant_id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

/// Tenant teardown only; everyday removal is [`deactivate`].
pub async fn delete_all(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM products WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .execute(ex)
        .await?;
    Ok(())
}

pub async fn count_active(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE restaurant_id = ? AND is_active = 1")
        .bind(restaurant_id)
        .fetch_one(ex)
        .await
}
