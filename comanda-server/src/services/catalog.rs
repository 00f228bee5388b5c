//! Product catalog
//!
//! Per-restaurant product directory. Deletion is always soft: retired
//! products leave selection lists but keep resolving for historical orders.

use shared::error::{AppError, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate, Restaurant};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ServiceResult;

/// Products a waiter can currently put on an order.
pub async fn list_orderable(pool: &SqlitePool, restaurant_id: i64) -> ServiceResult<Vec<Product>> {
    Ok(db::products::list_active(pool, restaurant_id).await?)
}

pub async fn create(
    pool: &SqlitePool,
    restaurant: &Restaurant,
    payload: &ProductCreate,
    now: i64,
) -> ServiceResult<Product> {
    validate(&payload.name, payload.price_cents)?;
    if let Some(max) = restaurant.plan.limits().max_products {
        let used = db::products::count_active(pool, restaurant.id).await?;
        if used >= i64::from(max) {
            return Err(AppError::from(ErrorCode::PlanLimitReached)
                .with_detail("resource", "products")
                .with_detail("limit", max)
                .into());
        }
    }
    Ok(db::products::create(pool, restaurant.id, payload, now).await?)
}

pub async fn update(
    pool: &SqlitePool,
    restaurant_id: i64,
    product_id: i64,
    payload: &ProductUpdate,
) -> ServiceResult<Product> {
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError::validation("Product name must not be empty").into());
        }
    }
    if matches!(payload.price_cents, Some(p) if p < 0) {
        return Err(ErrorCode::PriceInvalid.into());
    }
    db::products::update(pool, restaurant_id, product_id, payload)
        .await?
        .ok_or_else(|| ErrorCode::ProductNotFound.into())
}

pub async fn deactivate(
    pool: &SqlitePool,
    restaurant_id: i64,
    product_id: i64,
) -> ServiceResult<()> {
    let affected = db::products::deactivate(pool, restaurant_id, product_id).await?;
    if affected == 0 {
        return Err(ErrorCode::ProductNotFound.into());
    }
    Ok(())
}

fn validate(name: &str, price_cents: i64) -> ServiceResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name must not be empty").into());
    }
    if price_cents < 0 {
        return Err(ErrorCode::PriceInvalid.into());
    }
    Ok(())
}
