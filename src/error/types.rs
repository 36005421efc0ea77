/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the FinBro backend.
 * Each variant maps to a fixed HTTP status code; the message rendered
 * to clients is the variant's display string, except for infrastructure
 * faults which render an opaque message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// Domain errors (`Validation`, `Authentication`, `Conflict`,
/// `MethodNotAllowed`) carry a client-facing message. Infrastructure errors
/// (`Database`, `Upstream`, `Internal`) keep their detail for logs only and
/// render as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field
    #[error("{0}")]
    Validation(String),

    /// Missing identity header or invalid credentials
    #[error("{0}")]
    Authentication(String),

    /// Duplicate email at registration
    ///
    /// Answered as 400 rather than 409; existing clients key off that.
    #[error("{0}")]
    Conflict(String),

    /// Unsupported HTTP method on an endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Database pool is not configured
    #[error("Database not configured")]
    Unavailable,

    /// Database query failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Outbound request to the AI API failed
    #[error("Upstream request failed")]
    Upstream(#[from] reqwest::Error),

    /// Invariant violation or other internal fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            // Duplicate registration answers 400, not 409; clients key off it.
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message rendered to clients
    ///
    /// Infrastructure faults never leak their detail to the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Upstream(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Check whether a database error is a unique-constraint violation
///
/// Used by the registration insert and the conversation resolve-or-create
/// path to convert a lost insert race into a typed outcome.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("chat_id and message required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::authentication("User ID required").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::conflict("Email already registered").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::internal("broken invariant").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_errors_expose_their_message() {
        let err = ApiError::validation("Email and password are required");
        assert_eq!(err.public_message(), "Email and password are required");

        let err = ApiError::MethodNotAllowed;
        assert_eq!(err.public_message(), "Method not allowed");
    }

    #[test]
    fn test_infrastructure_errors_are_opaque() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.public_message(), "Internal server error");

        let err = ApiError::internal("pool exhausted on node 3");
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::Database(_)));
    }

    #[test]
    fn test_row_not_found_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
