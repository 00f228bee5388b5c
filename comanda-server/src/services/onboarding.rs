//! Tenant onboarding
//!
//! Registration creates the whole tenant in one transaction: restaurant,
//! admin user, default configuration and a small starter menu. The api key
//! for the public read endpoint is generated here, once.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    PlanTier, Restaurant, RestaurantConfig, RestaurantCreate, User, UserCreate,
};
use shared::util::{now_millis, slugify};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ServiceResult;

/// Menu every new restaurant starts with.
const STARTER_MENU: &[(&str, i64)] = &[
    ("Pizza Muzzarella", 250_000),
    ("Hamburguesa Completa", 320_000),
    ("Coca-Cola 500ml", 120_000),
    ("Agua Mineral", 90_000),
];

#[derive(Debug, Deserialize)]
pub struct Registration {
    pub restaurant: RestaurantCreate,
    pub admin: UserCreate,
}

#[derive(Debug, serde::Serialize)]
pub struct Onboarded {
    pub restaurant: Restaurant,
    pub admin: User,
    pub config: RestaurantConfig,
}

pub async fn register(pool: &SqlitePool, payload: &Registration) -> ServiceResult<Onboarded> {
    let name = payload.restaurant.name.trim();
    if name.len() < 2 {
        return Err(AppError::validation("Restaurant name must have at least 2 characters").into());
    }
    let email = payload.admin.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email address").into());
    }
    if payload.admin.password.len() < 6 {
        return Err(AppError::validation("Password must have at least 6 characters").into());
    }
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(AppError::validation("Restaurant name must contain letters or digits").into());
    }

    let password_hash = hash_password(&payload.admin.password)?;
    let now = now_millis();
    let api_key = uuid::Uuid::new_v4().to_string();

    let mut tx = pool.begin().await?;
    if db::restaurants::find_by_slug(&mut *tx, &slug).await?.is_some() {
        return Err(AppError::from(ErrorCode::SlugTaken).with_detail("slug", slug).into());
    }
    if db::users::find_by_email(&mut *tx, &email).await?.is_some() {
        return Err(ErrorCode::EmailTaken.into());
    }

    let restaurant = db::restaurants::create(
        &mut *tx,
        name,
        &slug,
        payload.restaurant.address.trim(),
        payload.restaurant.phone.trim(),
        payload.restaurant.currency.as_deref().unwrap_or("$"),
        payload.restaurant.timezone.as_deref().unwrap_or("UTC"),
        payload.restaurant.plan.unwrap_or(PlanTier::Free),
        &api_key,
        now,
    )
    .await?;

    let admin = db::users::create(
        &mut *tx,
        restaurant.id,
        payload.admin.name.trim(),
        &email,
        &password_hash,
        true,
        true,
        now,
    )
    .await?;

    let config = db::configs::create_defaults(&mut *tx, restaurant.id).await?;

    for (product_name, price_cents) in STARTER_MENU {
        db::products::create(
            &mut *tx,
            restaurant.id,
            &shared::models::ProductCreate {
                name: (*product_name).to_string(),
                price_cents: *price_cents,
            },
            now,
        )
        .await?;
    }

    tx.commit().await?;
    tracing::info!(restaurant_id = restaurant.id, slug = %restaurant.slug, "restaurant onboarded");
    Ok(Onboarded {
        restaurant,
        admin,
        config,
    })
}

/// Add a staff account to an existing restaurant.
pub async fn add_user(
    pool: &SqlitePool,
    restaurant: &Restaurant,
    payload: &UserCreate,
) -> ServiceResult<User> {
    let email = payload.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email address").into());
    }
    if payload.password.len() < 6 {
        return Err(AppError::validation("Password must have at least 6 characters").into());
    }
    if let Some(max) = restaurant.plan.limits().max_users {
        let used = db::users::count_for_restaurant(pool, restaurant.id).await?;
        if used >= i64::from(max) {
            return Err(AppError::from(ErrorCode::PlanLimitReached)
                .with_detail("resource", "users")
                .with_detail("limit", max)
                .into());
        }
    }
    if db::users::find_by_email(pool, &email).await?.is_some() {
        return Err(ErrorCode::EmailTaken.into());
    }
    let password_hash = hash_password(&payload.password)?;
    let user = db::users::create(
        pool,
        restaurant.id,
        payload.name.trim(),
        &email,
        &password_hash,
        false,
        true,
        now_millis(),
    )
    .await?;
    Ok(user)
}

/// Soft-disable: the tenant keeps its data but every identity and api-key
/// lookup starts failing.
pub async fn set_restaurant_active(
    pool: &SqlitePool,
    restaurant_id: i64,
    active: bool,
) -> ServiceResult<Restaurant> {
    let affected = db::restaurants::set_active(pool, restaurant_id, active).await?;
    if affected == 0 {
        return Err(ErrorCode::RestaurantNotFound.into());
    }
    db::restaurants::find_by_id(pool, restaurant_id)
        .await?
        .ok_or_else(|| ErrorCode::RestaurantNotFound.into())
}

/// Hard deletion, refused while any order exists.
///
/// Users, products and the config row go with the restaurant in one
/// transaction; their foreign keys have no cascade, so leaving any behind
/// would abort the delete.
pub async fn delete_restaurant(pool: &SqlitePool, restaurant_id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;
    if db::restaurants::find_by_id(&mut *tx, restaurant_id).await?.is_none() {
        return Err(ErrorCode::RestaurantNotFound.into());
    }
    if db::restaurants::has_orders(&mut *tx, restaurant_id).await? {
        return Err(ErrorCode::RestaurantHasOrders.into());
    }
    db::configs::delete(&mut *tx, restaurant_id).await?;
    db::products::delete_all(&mut *tx, restaurant_id).await?;
    db::users::delete_all(&mut *tx, restaurant_id).await?;
    db::restaurants::delete(&mut *tx, restaurant_id).await?;
    tx.commit().await?;
    tracing::info!(restaurant_id, "restaurant deleted");
    Ok(())
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AppError::new(ErrorCode::InternalError)
        })
}
