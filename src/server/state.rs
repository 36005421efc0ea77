/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application, holding:
 * - The optional PostgreSQL connection pool
 * - The proxy gateway configuration
 * - The outbound HTTP client (connection-pooled, 30 s timeout)
 *
 * No other state is shared between requests. Each request checks a
 * connection out of the pool for its own lifetime; the pool releases it
 * on every exit path.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::ProxyConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g. if the
    /// `DATABASE_URL` environment variable is not set). Handlers answer
    /// 503 in that case.
    pub db_pool: Option<PgPool>,

    /// Proxy gateway configuration (upstream URL and shared secret)
    pub proxy: ProxyConfig,

    /// Outbound HTTP client used by the proxy gateway
    pub http: reqwest::Client,
}

/// Allows handlers to extract the optional database pool directly.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::build_http_client;

    #[test]
    fn test_pool_extraction() {
        let state = AppState {
            db_pool: None,
            proxy: ProxyConfig {
                api_url: "http://localhost:9/api".to_string(),
                password: "secret".to_string(),
            },
            http: build_http_client(),
        };

        let pool: Option<PgPool> = FromRef::from_ref(&state);
        assert!(pool.is_none());
    }
}
