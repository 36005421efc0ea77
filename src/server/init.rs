/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: loading services, creating the application state, and
 * configuring the router.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool (and run migrations)
 * 2. Load the proxy gateway configuration
 * 3. Build the outbound HTTP client
 * 4. Create the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database disables persistence
 * features (handlers answer 503) but does not prevent startup.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{build_http_client, load_database, ProxyConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router {
    tracing::info!("Initializing FinBro backend server");

    let db_pool = load_database().await;
    let proxy = ProxyConfig::from_env();
    let http = build_http_client();

    let app_state = AppState {
        db_pool,
        proxy,
        http,
    };

    tracing::info!("Router configured");

    create_router(app_state)
}
