use axum::extract::{Path, State};
use axum::{Extension, Json};
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::util::now_millis;

use super::{ApiResult, ok};
use crate::auth::Identity;
use crate::services::catalog;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Vec<Product>> {
    ok(catalog::list_orderable(&state.pool, identity.restaurant.id).await?)
}

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ProductCreate>,
) -> ApiResult<Product> {
    ok(catalog::create(&state.pool, &identity.restaurant, &payload, now_millis()).await?)
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(product_id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> ApiResult<Product> {
    ok(catalog::update(&state.pool, identity.restaurant.id, product_id, &payload).await?)
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(product_id): Path<i64>,
) -> ApiResult<()> {
    catalog::deactivate(&state.pool, identity.restaurant.id, product_id).await?;
    ok(())
}
