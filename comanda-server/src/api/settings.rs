//! Restaurant settings (admin only)

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::ErrorCode;
use shared::models::{ConfigUpdate, Restaurant, RestaurantConfig};

use super::{ApiResult, ok};
use crate::auth::Identity;
use crate::db;
use crate::services::onboarding;
use crate::state::AppState;

pub async fn show(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<RestaurantConfig> {
    let config = db::configs::find(&state.pool, identity.restaurant.id)
        .await?
        .ok_or(ErrorCode::NotFound)?;
    ok(config)
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ConfigUpdate>,
) -> ApiResult<RestaurantConfig> {
    identity.require_admin()?;
    let config = db::configs::update(&state.pool, identity.restaurant.id, &payload)
        .await?
        .ok_or(ErrorCode::NotFound)?;
    ok(config)
}

#[derive(Debug, Deserialize)]
pub struct ActiveToggle {
    pub active: bool,
}

/// Open or close the shop without losing any data.
pub async fn set_active(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ActiveToggle>,
) -> ApiResult<Restaurant> {
    identity.require_admin()?;
    ok(onboarding::set_restaurant_active(&state.pool, identity.restaurant.id, payload.active).await?)
}

/// Permanent removal of the tenant; refused while orders exist.
pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<()> {
    identity.require_admin()?;
    onboarding::delete_restaurant(&state.pool, identity.restaurant.id).await?;
    ok(())
}
