/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the optional PostgreSQL database connection and the settings for the
 * FinBro AI proxy gateway.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development when possible.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Services that fail to initialize are set to `None` and the server
 * continues without them.
 */

use std::time::Duration;

use sqlx::PgPool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Request timeout applied to every call to the AI API.
pub const PROXY_TIMEOUT: Duration = Duration::from_secs(30);

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function
/// returns `None` on any error, allowing the server to run without
/// database features (handlers answer 503 in that case).
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Proxy gateway configuration
///
/// The FinBro AI API sits behind a fixed endpoint with a fixed shared
/// secret sent in the request body. Both are overridable via environment
/// for staging setups.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    /// Upstream API endpoint
    pub api_url: String,
    /// Shared secret forwarded in the request body
    pub password: String,
}

impl ProxyConfig {
    /// Load proxy settings from environment, falling back to the
    /// production endpoint.
    pub fn from_env() -> Self {
        let api_url = std::env::var("FINBRO_API_URL").unwrap_or_else(|_| {
            "https://app.myjedai.ru/api/rest/85d6f91bb1e70414414cd0bb3ca059be".to_string()
        });
        let password =
            std::env::var("FINBRO_API_PASSWORD").unwrap_or_else(|_| "1234512345".to_string());

        Self { api_url, password }
    }
}

/// Build the outbound HTTP client used by the proxy gateway
///
/// The timeout bounds the whole request, matching the upstream contract;
/// database operations carry no such timeout.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(PROXY_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_timeout_is_30s() {
        assert_eq!(PROXY_TIMEOUT, Duration::from_secs(30));
    }

    #[test]
    fn test_build_http_client() {
        // Client construction must not panic with the default TLS backend.
        let _client = build_http_client();
    }
}
