/**
 * Router Configuration
 *
 * This module provides the main router creation function that wires all
 * endpoints into a single Axum router.
 *
 * # Routes
 *
 * - `POST /api/auth` - registration and login (action-keyed body)
 * - `GET|POST /api/chat-history` - chat history views and writes
 * - `POST /api/chat` - proxy to the FinBro AI API
 *
 * # Cross-Origin
 *
 * The CORS layer answers preflight `OPTIONS` requests with permissive
 * headers (any origin, the methods above, the identity headers) and a
 * 24 h max-age. An explicit `options` handler covers non-preflight
 * `OPTIONS` so any `OPTIONS` request yields an empty 200.
 *
 * # Method Guards
 *
 * Each route carries a fallback so an unsupported method answers 405
 * with `{"error":"Method not allowed"}` instead of an empty response.
 */

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::handle_auth;
use crate::error::ApiError;
use crate::history::{get_history, post_history};
use crate::proxy::post_chat;
use crate::server::state::AppState;

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, proxy config, HTTP client)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-auth-token"),
            HeaderName::from_static("x-session-id"),
        ])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route(
            "/api/auth",
            post(handle_auth)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/chat-history",
            get(get_history)
                .post(post_history)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/chat",
            post(post_chat)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
        .with_state(app_state)
}
