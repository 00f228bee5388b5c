use axum::Extension;
use axum::extract::{Query, State};
use serde::Deserialize;
use shared::util::now_millis;

use super::{ApiResult, ok};
use crate::auth::Identity;
use crate::services::history::{self, HistoryReport, HistoryWindow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub window: HistoryWindow,
}

pub async fn report(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<HistoryReport> {
    ok(history::report(&state.pool, &identity.restaurant, query.window, now_millis()).await?)
}
