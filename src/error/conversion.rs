/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `ApiError`,
 * allowing handlers to return errors directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Infrastructure detail goes to the log, never to the client.
        match &self {
            ApiError::Database(e) => tracing::error!("Database error: {:?}", e),
            ApiError::Upstream(e) => tracing::error!("Upstream request failed: {:?}", e),
            ApiError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => {}
        }

        let status = self.status_code();
        let body = serde_json::json!({ "error": self.public_message() });

        (status, Json(body)).into_response()
    }
}
