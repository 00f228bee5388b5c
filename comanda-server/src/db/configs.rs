use shared::models::{ConfigUpdate, RestaurantConfig};
use sqlx::{Executor, Sqlite};

/// Insert the default configuration row for a new restaurant.
pub async fn create_defaults(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<RestaurantConfig, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO restaurant_configs (restaurant_id) VALUES (?) RETURNING *",
    )
    .bind(restaurant_id)
    .fetch_one(ex)
    .await
}

pub async fn find(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<Option<RestaurantConfig>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM restaurant_configs WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .fetch_optional(ex)
        .await
}

pub async fn delete(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM restaurant_configs WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .execute(ex)
        .await?;
    Ok(())
}

pub async fn update(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    payload: &ConfigUpdate,
) -> Result<Option<RestaurantConfig>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE restaurant_configs SET
            printer_enabled = COALESCE(?, printer_enabled),
            printer_kind = COALESCE(?, printer_kind),
            printer_address = COALESCE(?, printer_address),
            printer_port = COALESCE(?, printer_port),
            theme = COALESCE(?, theme),
            show_prices = COALESCE(?, show_prices)
         WHERE restaurant_id = ?
         RETURNING *",
    )
    .bind(payload.printer_enabled)
    .bind(payload.printer_kind)
    .bind(&payload.printer_address)
    .bind(payload.printer_port)
    .bind(&payload.theme)
    .bind(payload.show_prices)
    .bind(restaurant_id)
    .fetch_optional(ex)
    .await
}
