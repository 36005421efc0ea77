//! Authentication Handlers
//!
//! HTTP handlers for `POST /api/auth`. The endpoint is action-keyed: the
//! JSON body carries an `action` field selecting registration or login.
//!
//! - `{action:"register", email, password, username}` → account + token
//! - `{action:"login", email, password}` → account + token
//! - anything else → 400 `{"error":"Invalid action"}`

/// Request/response types
pub mod types;

/// Registration
pub mod register;

/// Login
pub mod login;

use axum::extract::State;
use axum::Json;
use sqlx::PgPool;

use crate::error::ApiError;
use types::{AuthRequest, AuthResponse};

/// Auth endpoint handler
///
/// Dispatches on the `action` field of the request body. The database
/// pool is required for both actions, so its absence is checked before
/// the action is inspected.
pub async fn handle_auth(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::Unavailable
    })?;

    match request.action.as_str() {
        "register" => register::register(&pool, request).await,
        "login" => login::login(&pool, request).await,
        other => {
            tracing::warn!("Unknown auth action: {:?}", other);
            Err(ApiError::validation("Invalid action"))
        }
    }
}
