use axum::extract::State;
use axum::{Extension, Json};
use shared::models::{User, UserCreate};

use super::{ApiResult, ok};
use crate::auth::Identity;
use crate::services::onboarding;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<UserCreate>,
) -> ApiResult<User> {
    identity.require_admin()?;
    ok(onboarding::add_user(&state.pool, &identity.restaurant, &payload).await?)
}
