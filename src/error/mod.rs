//! Backend Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers and the
//! conversions that turn those errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Categories
//!
//! - `Validation` - missing or empty required fields (400)
//! - `Authentication` - missing identity header or bad credentials (401)
//! - `Conflict` - duplicate email at registration (400, not 409)
//! - `MethodNotAllowed` - unsupported method on an endpoint (405)
//! - `Unavailable` - database pool not configured (503)
//! - `Database` / `Upstream` / `Internal` - infrastructure faults (opaque 500)
//!
//! # HTTP Response Conversion
//!
//! All errors implement `IntoResponse` from Axum, allowing them to be returned
//! directly from handlers. Domain errors render their message in a structured
//! `{"error": message}` body; infrastructure faults are logged in full but the
//! response body never leaks internal detail.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{is_unique_violation, ApiError};
