/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the auth
 * endpoint. All request fields default to empty so a missing field reads
 * as an empty value; validation decides what is required per action.
 */

use serde::{Deserialize, Serialize};

/// Auth request body for `POST /api/auth`
///
/// One shape for both actions. `username` is only meaningful for
/// registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct AuthRequest {
    /// Selected action: "register" or "login"
    #[serde(default)]
    pub action: String,
    /// Email address (normalized before use)
    #[serde(default)]
    pub email: String,
    /// Password (hashed before storage, verified at login)
    #[serde(default)]
    pub password: String,
    /// Display name (registration only)
    #[serde(default)]
    pub username: String,
}

/// Success response for register and login
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Always true on success
    pub success: bool,
    /// Account information plus session token
    pub user: UserPayload,
}

/// Account payload returned to clients (no sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserPayload {
    /// Account's unique ID (UUID)
    pub id: String,
    /// Normalized email address
    pub email: String,
    /// Display name
    pub username: String,
    /// Opaque session token
    pub token: String,
}
