/**
 * Proxy Gateway
 *
 * Handler for POST /api/chat: validates the request, forwards
 * `{message, chat_id, password}` to the FinBro AI API with the shared
 * secret from configuration, and relays the upstream JSON body verbatim.
 *
 * The outbound call is bounded by the client-level 30 s timeout. Upstream
 * transport failures and non-JSON bodies are logged and surface to the
 * caller as an opaque 500.
 */

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Request body for the proxy endpoint
#[derive(Deserialize, Debug)]
pub struct ProxyRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub chat_id: String,
}

/// Forward a message to the AI API and relay the response
///
/// # Errors
///
/// * `400` - missing `message` or `chat_id`
/// * `500` - upstream call failed or returned a non-JSON body
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ProxyRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if request.message.is_empty() || request.chat_id.is_empty() {
        return Err(ApiError::validation("Missing message or chat_id"));
    }

    tracing::info!("Proxying message for chat {}", request.chat_id);

    let response = state
        .http
        .post(&state.proxy.api_url)
        .json(&serde_json::json!({
            "message": request.message,
            "chat_id": request.chat_id,
            "password": state.proxy.password,
        }))
        .send()
        .await?;

    let body = response.json::<serde_json::Value>().await?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::{build_http_client, ProxyConfig};

    fn test_state() -> AppState {
        AppState {
            db_pool: None,
            proxy: ProxyConfig {
                // Port 9 (discard) so an accidental send fails fast.
                api_url: "http://127.0.0.1:9/api".to_string(),
                password: "secret".to_string(),
            },
            http: build_http_client(),
        }
    }

    #[tokio::test]
    async fn test_missing_message_rejected_before_send() {
        let request = ProxyRequest {
            message: String::new(),
            chat_id: "c1".to_string(),
        };

        let result = post_chat(State(test_state()), Json(request)).await;
        match result.unwrap_err() {
            ApiError::Validation(msg) => assert_eq!(msg, "Missing message or chat_id"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_chat_id_rejected_before_send() {
        let request = ProxyRequest {
            message: "hi".to_string(),
            chat_id: String::new(),
        };

        let result = post_chat(State(test_state()), Json(request)).await;
        assert!(matches!(result.unwrap_err(), ApiError::Validation(_)));
    }
}
