use shared::models::{LineItemView, Order, OrderDraft};
use sqlx::{Executor, Sqlite};

pub async fn insert(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    user_id: i64,
    draft: &OrderDraft,
    table_label: Option<&str>,
    now: i64,
) -> Result<Order, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO orders (
            restaurant_id, user_id, consumption, table_label,
            customer_name, customer_address, payment,
            ticket_number, cardholder, transfer_reference, debtor_name,
            status, created_at
         )
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'PENDING', ?)
         RETURNING *",
    )
    .bind(restaurant_id)
    .bind(user_id)
    .bind(draft.consumption)
    .bind(table_label)
    .bind(&draft.customer_name)
    .bind(&draft.customer_address)
    .bind(draft.payment)
    .bind(&draft.ticket_number)
    .bind(&draft.cardholder)
    .bind(&draft.transfer_reference)
    .bind(&draft.debtor_name)
    .bind(now)
    .fetch_one(ex)
    .await
}

pub async fn find(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    order_id: i64,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE id = ? AND restaurant_id = ?")
        .bind(order_id)
        .bind(restaurant_id)
        .fetch_optional(ex)
        .await
}

/// The open dine-in order for a table, if any. Target of consolidation.
pub async fn find_pending_for_table(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    table_label: &str,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM orders
         WHERE restaurant_id = ? AND table_label = ?
           AND status = 'PENDING' AND consumption = 'LOCAL'",
    )
    .bind(restaurant_id)
    .bind(table_label)
    .fetch_optional(ex)
    .await
}

/// Overwrite the mutable order fields. Line items are handled separately.
pub async fn update_fields(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    order_id: i64,
    draft: &OrderDraft,
    table_label: Option<&str>,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE orders SET
            consumption = ?,
            table_label = ?,
            customer_name = ?,
            customer_address = ?,
            payment = ?,
            ticket_number = ?,
            cardholder = ?,
            transfer_reference = ?,
            debtor_name = ?
         WHERE id = ? AND restaurant_id = ?
         RETURNING *",
    )
    .bind(draft.consumption)
    .bind(table_label)
    .bind(&draft.customer_name)
    .bind(&draft.customer_address)
    .bind(draft.payment)
    .bind(&draft.ticket_number)
    .bind(&draft.cardholder)
    .bind(&draft.transfer_reference)
    .bind(&draft.debtor_name)
    .bind(order_id)
    .bind(restaurant_id)
    .fetch_optional(ex)
    .await
}

/// Consolidation upsert: one row per (order, product), quantities add up.
pub async fn upsert_item(
    ex: impl Executor<'_, Database = Sqlite>,
    order_id: i64,
    product_id: i64,
    quantity: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO line_items (order_id, product_id, quantity)
         VALUES (?, ?, ?)
         ON CONFLICT (order_id, product_id)
         DO UPDATE SET quantity = quantity + excluded.quantity",
    )
    .bind(order_id)
    .bind(product_id)
    .bind(quantity)
    .execute(ex)
    .await?;
    Ok(())
}

pub async fn clear_items(
    ex: impl Executor<'_, Database = Sqlite>,
    order_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM line_items WHERE order_id = ?")
        .bind(order_id)
        .execute(ex)
        .await?;
    Ok(())
}

/// Line items joined with their products, for display and receipts.
pub async fn items_view(
    ex: impl Executor<'_, Database = Sqlite>,
    order_id: i64,
) -> Result<Vec<LineItemView>, sqlx::Error> {
    sqlx::query_as(
        "SELECT li.product_id, p.name, p.price_cents AS unit_price_cents, li.quantity
         FROM line_items li
         JOIN products p ON p.id = li.product_id
         WHERE li.order_id = ?
         ORDER BY li.id",
    )
    .bind(order_id)
    .fetch_all(ex)
    .await
}

/// First-write-wins kitchen arrival stamp.
pub async fn set_kitchen_at_if_unset(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    order_id: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE orders SET kitchen_at = ?
         WHERE id = ? AND restaurant_id = ? AND kitchen_at IS NULL",
    )
    .bind(now)
    .bind(order_id)
    .bind(restaurant_id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

/// Unconditional status overwrite; calling on a Delivered order is a no-op.
pub async fn set_delivered(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    order_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE orders SET status = 'DELIVERED' WHERE id = ? AND restaurant_id = ?",
    )
    .bind(order_id)
    .bind(restaurant_id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

/// Line items go with the order (ON DELETE CASCADE).
pub async fn delete(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    order_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM orders WHERE id = ? AND restaurant_id = ?")
        .bind(order_id)
        .bind(restaurant_id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}

/// Non-delivered orders, newest first.
pub async fn list_active(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM orders
         WHERE restaurant_id = ? AND status != 'DELIVERED'
         ORDER BY created_at DESC, id DESC",
    )
    .bind(restaurant_id)
    .fetch_all(ex)
    .await
}

/// Delivered orders, newest first, optionally bounded below (inclusive).
pub async fn list_delivered_since(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    cutoff: Option<i64>,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM orders
         WHERE restaurant_id = ? AND status = 'DELIVERED'
           AND created_at >= COALESCE(?, created_at)
         ORDER BY created_at DESC, id DESC",
    )
    .bind(restaurant_id)
    .bind(cutoff)
    .fetch_all(ex)
    .await
}

/// Orders created at or after `since` (daily plan quota).
pub async fn count_created_since(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    since: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE restaurant_id = ? AND created_at >= ?")
        .bind(restaurant_id)
        .bind(since)
        .fetch_one(ex)
        .await
}
