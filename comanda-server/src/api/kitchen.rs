use axum::extract::State;
use axum::Extension;
use shared::util::now_millis;

use super::{ApiResult, ok};
use crate::auth::Identity;
use crate::services::kitchen::{self, KitchenEntry};
use crate::state::AppState;

pub async fn board(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Vec<KitchenEntry>> {
    ok(kitchen::board(&state.pool, &state.ledger, &identity.restaurant, now_millis()).await?)
}
