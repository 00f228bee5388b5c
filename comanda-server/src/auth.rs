//! Identity middleware
//!
//! The authentication layer in front of this service resolves credentials
//! and forwards the acting tenant as `X-Restaurant-Id` / `X-User-Id`
//! headers. This middleware turns those headers into an [`Identity`]
//! extension after verifying the restaurant exists, is active, and owns the
//! user. Handlers never touch raw ids.

use axum::extract::{Request, State};
use http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use shared::error::{AppError, ErrorCode};
use shared::models::{Restaurant, User};

use crate::db;
use crate::state::AppState;

pub const RESTAURANT_HEADER: &str = "x-restaurant-id";
pub const USER_HEADER: &str = "x-user-id";

/// The acting tenant and user, attached to every tenant-scoped request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub restaurant: Restaurant,
    pub user: User,
}

impl Identity {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.user.is_admin || self.user.is_superadmin {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::AdminRequired))
        }
    }
}

pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let restaurant_id = header_id(request.headers(), RESTAURANT_HEADER)?;
    let user_id = header_id(request.headers(), USER_HEADER)?;

    let restaurant = db::restaurants::find_by_id(&state.pool, restaurant_id)
        .await
        .map_err(db_error)?
        .ok_or(ErrorCode::RestaurantNotFound)?;
    if !restaurant.is_active {
        return Err(AppError::new(ErrorCode::RestaurantDisabled));
    }

    let user = db::users::find_by_id(&state.pool, user_id)
        .await
        .map_err(db_error)?
        // Users of one restaurant do not exist from another's viewpoint.
        .filter(|u| u.restaurant_id == restaurant.id && u.is_active)
        .ok_or(ErrorCode::NotAuthenticated)?;

    request.extensions_mut().insert(Identity { restaurant, user });
    Ok(next.run(request).await)
}

fn header_id(headers: &HeaderMap, name: &str) -> Result<i64, AppError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated))
}

fn db_error(err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "identity lookup failed");
    AppError::new(ErrorCode::DatabaseError)
}
