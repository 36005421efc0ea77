/**
 * Login
 *
 * Implements the "login" action of POST /api/auth.
 *
 * # Authentication Process
 *
 * 1. Normalize the email; reject if email or password is empty
 * 2. Verify credentials (lookup + bcrypt verify)
 * 3. Mint an opaque session token
 *
 * # Security Notes
 *
 * - Unknown email and wrong password produce the identical 401 response,
 *   so callers cannot enumerate accounts through login
 * - Passwords are never logged or returned
 */

use axum::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthRequest, AuthResponse, UserPayload};
use crate::auth::tokens::generate_token;
use crate::auth::users::{normalize_email, verify_credentials};
use crate::error::ApiError;

/// Authenticate an account
///
/// # Errors
///
/// * `400` - missing email or password
/// * `401` - credentials do not match (which field failed is not revealed)
/// * `500` - database or hashing failure
pub async fn login(pool: &PgPool, request: AuthRequest) -> Result<Json<AuthResponse>, ApiError> {
    let email = normalize_email(&request.email);

    if email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    tracing::info!("Login request for email: {}", email);

    let account = verify_credentials(pool, &email, &request.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Failed login for email: {}", email);
            ApiError::authentication("Invalid email or password")
        })?;

    let token = generate_token();

    tracing::info!("Login succeeded: {} ({})", account.username, account.email);

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

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://postgres@localhost/finbro_unreachable")
            .expect("lazy pool")
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let request = AuthRequest {
            action: "login".to_string(),
            email: "a@x.com".to_string(),
            password: String::new(),
            username: String::new(),
        };

        let result = login(&lazy_pool(), request).await;
        match result.unwrap_err() {
            ApiError::Validation(msg) => assert_eq!(msg, "Email and password are required"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_email_only_whitespace() {
        let request = AuthRequest {
            action: "login".to_string(),
            email: "   ".to_string(),
            password: "pw".to_string(),
            username: String::new(),
        };

        let result = login(&lazy_pool(), request).await;
        assert!(matches!(result.unwrap_err(), ApiError::Validation(_)));
    }
}
