//! Public print-client endpoint
//!
//! Read-only, keyed by the restaurant's api key instead of a session. The
//! print client polls this and decides itself what it has already printed;
//! the endpoint has no printed-set of its own, so delivery is at-least-once
//! from its perspective.

use axum::extract::{Path, State};
use serde::Serialize;
use shared::error::ErrorCode;
use shared::models::OrderView;

use super::{ApiResult, ok};
use crate::db;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PublicOrders {
    pub restaurant: String,
    pub currency: String,
    pub count: usize,
    pub orders: Vec<OrderView>,
}

pub async fn orders(
    State(state): State<AppState>,
    Path(api_key): Path<String>,
) -> ApiResult<PublicOrders> {
    let restaurant = db::restaurants::find_active_by_api_key(&state.pool, &api_key)
        .await?
        .ok_or(ErrorCode::ApiKeyInvalid)?;
    let orders = state.ledger.active_orders(restaurant.id).await?;
    ok(PublicOrders {
        restaurant: restaurant.name,
        currency: restaurant.currency,
        count: orders.len(),
        orders,
    })
}
