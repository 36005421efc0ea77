/**
 * Identity Extraction
 *
 * The chat-history and message endpoints identify the caller purely by an
 * `X-User-Id` request header carrying the account id. No token signature
 * or expiry is verified here; the header is the whole identity contract.
 *
 * Absence of the header is an authentication failure (401), not a
 * missing-field validation failure. A malformed id is treated the same
 * way: the account id is a UUID, so a value that does not parse can never
 * identify an account.
 */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::ApiError;

/// Header naming the calling account. Header lookup is case-insensitive.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated account id extracted from the `X-User-Id` header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserId(pub Uuid);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing {} header", USER_ID_HEADER);
                ApiError::authentication("User ID required")
            })?;

        let user_id = Uuid::parse_str(raw.trim()).map_err(|_| {
            tracing::warn!("Malformed {} header", USER_ID_HEADER);
            ApiError::authentication("User ID required")
        })?;

        Ok(UserId(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_for(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_extracts_user_id() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .uri("http://example.com/api/chat-history")
            .header("X-User-Id", id.to_string())
            .body(())
            .unwrap();

        let extracted = UserId::from_request_parts(&mut parts_for(request), &()).await;
        assert_eq!(extracted.unwrap(), UserId(id));
    }

    #[tokio::test]
    async fn test_header_name_is_case_insensitive() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .uri("http://example.com/api/chat-history")
            .header("x-USER-id", id.to_string())
            .body(())
            .unwrap();

        let extracted = UserId::from_request_parts(&mut parts_for(request), &()).await;
        assert_eq!(extracted.unwrap(), UserId(id));
    }

    #[tokio::test]
    async fn test_missing_header_is_authentication_failure() {
        let request = Request::builder()
            .uri("http://example.com/api/chat-history")
            .body(())
            .unwrap();

        let rejection = UserId::from_request_parts(&mut parts_for(request), &())
            .await
            .unwrap_err();
        assert!(matches!(rejection, ApiError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_malformed_header_is_authentication_failure() {
        let request = Request::builder()
            .uri("http://example.com/api/chat-history")
            .header("X-User-Id", "not-a-uuid")
            .body(())
            .unwrap();

        let rejection = UserId::from_request_parts(&mut parts_for(request), &())
            .await
            .unwrap_err();
        assert!(matches!(rejection, ApiError::Authentication(_)));
    }
}
