use shared::models::User;
use sqlx::{Executor, Sqlite, SqlitePool};

#[allow(clippy::too_many_arguments)]
pub async fn create(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
    name: &str,
    email: &str,
    password_hash: &str,
    is_admin: bool,
    is_confirmed: bool,
    now: i64,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO users (restaurant_id, name, email, password_hash, is_admin, is_confirmed, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(restaurant_id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(is_admin)
    .bind(is_confirmed)
    .bind(now)
    .fetch_one(ex)
    .await
}

pub async fn find_by_id(
    ex: impl Executor<'_, Database = Sqlite>,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn find_by_email(
    ex: impl Executor<'_, Database = Sqlite>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(ex)
        .await
}

pub async fn count_for_restaurant(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE restaurant_id = ? AND is_active = 1")
        .bind(restaurant_id)
        .fetch_one(ex)
        .await
}

/// Tenant teardown only.
pub async fn delete_all(
    ex: impl Executor<'_, Database = Sqlite>,
    restaurant_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .execute(ex)
        .await?;
    Ok(())
}

/// Look up a user by email and verify the password.
///
/// Returns `None` for unknown emails, wrong passwords, disabled or
/// unconfirmed accounts and disabled restaurants alike — callers cannot
/// distinguish which check failed.
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user: Option<User> = sqlx::query_as(
        "SELECT u.* FROM users u
         JOIN restaurants r ON r.id = u.restaurant_id
         WHERE u.email = ? AND u.is_active = 1 AND u.is_confirmed = 1 AND r.is_active = 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let hash = match PasswordHash::new(&user.password_hash) {
        Ok(h) => h,
        Err(_) => return Ok(None),
    };

    if Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
    {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}
