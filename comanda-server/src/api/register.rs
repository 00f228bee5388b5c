use axum::Json;
use axum::extract::State;

use super::{ApiResult, ok};
use crate::services::onboarding::{self, Onboarded, Registration};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Registration>,
) -> ApiResult<Onboarded> {
    let onboarded = onboarding::register(&state.pool, &payload).await?;
    ok(onboarded)
}
