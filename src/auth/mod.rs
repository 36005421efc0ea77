//! Authentication Module
//!
//! This module handles user registration, login, and session token minting.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account model and database operations
//! ├── tokens.rs       - Opaque session token minting
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Action dispatch for POST /api/auth
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Registration
//!     └── login.rs    - Login
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: `{action:"register", email, password, username}` →
//!    account created → opaque token returned
//! 2. **Login**: `{action:"login", email, password}` → credentials
//!    verified → opaque token returned
//!
//! The token is opaque to the server: the chat-history endpoints identify
//! callers by the `X-User-Id` header, and nothing ever validates the token.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Login failures never reveal whether the email or the password was
//!   wrong; registration does reveal duplicate emails (clients display
//!   that message, so the asymmetry stays)

/// Account model and database operations
pub mod users;

/// Opaque session token minting
pub mod tokens;

/// HTTP handlers for the auth endpoint
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::handle_auth;
pub use handlers::types::{AuthRequest, AuthResponse, UserPayload};
