/**
 * Account Model and Database Operations
 *
 * This module handles account data and database operations. Emails are
 * stored normalized (trimmed, lowercased); every lookup goes through the
 * same normalization so casing and surrounding whitespace never produce
 * distinct identities.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;

/// Account record as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID, server-assigned)
    pub id: Uuid,
    /// Email address, normalized
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub username: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Get account by email
///
/// The email is normalized before lookup, so the comparison is
/// case-insensitive and whitespace-trimmed.
///
/// # Returns
/// Account or None if not found
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, email, password_hash, username, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Create a new account
///
/// The email must already be normalized by the caller. A unique violation
/// on the email column surfaces as `sqlx::Error`; callers translate it
/// into a duplicate-identity failure.
///
/// # Returns
/// Created account or error
pub async fn create_account(
    pool: &PgPool,
    email: String,
    password_hash: String,
    username: String,
) -> Result<Account, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO users (id, email, password_hash, username, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, username, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&email)
    .bind(&password_hash)
    .bind(&username)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Verify credentials against the stored account
///
/// Matches the normalized email and the password against the stored hash.
/// Returns `None` on any mismatch; the caller cannot distinguish an
/// unknown email from a wrong password.
pub async fn verify_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<Account>, ApiError> {
    let Some(account) = find_by_email(pool, email).await? else {
        return Ok(None);
    };

    let valid = bcrypt::verify(password, &account.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("password verification failed")
    })?;

    Ok(valid.then_some(account))
}
