use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderDraft, OrderView, RestaurantConfig};
use shared::util::now_millis;

use super::{ApiResult, ok};
use crate::auth::Identity;
use crate::db;
use crate::services::printing::{self, PrintOutcome};
use crate::state::AppState;

/// Order submission: the draft fields plus the selected product ids,
/// one entry per tap (repeats mean quantity).
#[derive(Debug, Deserialize)]
pub struct OrderSubmit {
    #[serde(flatten)]
    pub draft: OrderDraft,
    pub products: Vec<i64>,
}

/// Intake response: the resulting order plus what the printer should do.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    #[serde(flatten)]
    pub view: OrderView,
    pub print: PrintOutcome,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Vec<OrderView>> {
    ok(state.ledger.active_orders(identity.restaurant.id).await?)
}

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<OrderSubmit>,
) -> ApiResult<OrderCreated> {
    let view = state
        .ledger
        .create_or_append(
            &identity.restaurant,
            identity.user.id,
            payload.draft,
            &payload.products,
            now_millis(),
        )
        .await?;
    let config = db::configs::find(&state.pool, identity.restaurant.id)
        .await?
        .unwrap_or_else(|| RestaurantConfig::defaults(identity.restaurant.id));
    let print = printing::render_ticket(&identity.restaurant, &config, &view);
    ok(OrderCreated { view, print })
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(order_id): Path<i64>,
    Json(payload): Json<OrderSubmit>,
) -> ApiResult<OrderView> {
    ok(state
        .ledger
        .replace_items(&identity.restaurant, order_id, payload.draft, &payload.products)
        .await?)
}

pub async fn deliver(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(order_id): Path<i64>,
) -> ApiResult<Order> {
    ok(state
        .ledger
        .mark_delivered(identity.restaurant.id, order_id)
        .await?)
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(order_id): Path<i64>,
) -> ApiResult<()> {
    state.ledger.delete(identity.restaurant.id, order_id).await?;
    ok(())
}
