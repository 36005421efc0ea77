/**
 * Registration
 *
 * Implements the "register" action of POST /api/auth.
 *
 * # Registration Process
 *
 * 1. Normalize the email (trim + lowercase) and trim the username
 * 2. Reject if any of email, password, username is empty
 * 3. Reject if the email is already registered
 * 4. Hash the password using bcrypt
 * 5. Create the account
 * 6. Mint an opaque session token
 *
 * # Duplicate Handling
 *
 * The existence check races with concurrent registrations; the unique
 * constraint on the email column is the actual guard. A unique violation
 * at insert time is reported as the same duplicate failure.
 *
 * Registration reveals that an email is taken ("Email already
 * registered") while login never reveals which field failed. Clients
 * surface the registration message directly, so the asymmetry stays.
 */

use axum::Json;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthRequest, AuthResponse, UserPayload};
use crate::auth::tokens::generate_token;
use crate::auth::users::{create_account, find_by_email, normalize_email};
use crate::error::{is_unique_violation, ApiError};

/// Register a new account
///
/// # Errors
///
/// * `400` - missing field, or email already registered
/// * `500` - password hashing or database failure
pub async fn register(pool: &PgPool, request: AuthRequest) -> Result<Json<AuthResponse>, ApiError> {
    let email = normalize_email(&request.email);
    let username = request.username.trim().to_string();

    if email.is_empty() || request.password.is_empty() || username.is_empty() {
        return Err(ApiError::validation(
            "Email, password and username are required",
        ));
    }

    tracing::info!("Register request for email: {}", email);

    if find_by_email(pool, &email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("password hashing failed")
    })?;

    let account = match create_account(pool, email, password_hash, username).await {
        Ok(account) => account,
        // Lost the existence-check race; the constraint is authoritative.
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Concurrent registration conflict");
            return Err(ApiError::conflict("Email already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    let token = generate_token();

    tracing::info!("Account created: {} ({})", account.username, account.email);

    Ok(Json(AuthResponse {
        success: true,
        user: UserPayload {
            id: account.id.to_string(),
            email: account.email,
            username: account.username,
            token,
        },
    }))
}
