//! FinBro Backend - Main Library
//!
//! HTTP backend for the FinBro chat application: user registration and login,
//! per-user chat history persistence, and a proxy to the FinBro AI API.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`auth`** - User registration, login, and session token minting
//! - **`history`** - Chat history persistence (conversations and messages)
//! - **`proxy`** - Proxy gateway to the FinBro AI API
//! - **`middleware`** - Request identity extraction (`X-User-Id` header)
//! - **`routes`** - Router assembly and CORS configuration
//! - **`server`** - Configuration, application state, and initialization
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Architecture
//!
//! Each inbound request is handled independently against a shared PostgreSQL
//! connection pool. There is no background scheduling and no in-process cache;
//! the only stateful collaborator is the database. The one deliberate piece of
//! concurrency handling is the resolve-or-create path in `history::service`,
//! which relies on a unique constraint and a conflict-to-refetch retry.

/// Error taxonomy and HTTP response conversion
pub mod error;

/// User registration, login, and session tokens
pub mod auth;

/// Chat history persistence and views
pub mod history;

/// Proxy gateway to the FinBro AI API
pub mod proxy;

/// Request identity extraction
pub mod middleware;

/// Router assembly
pub mod routes;

/// Configuration, state, and initialization
pub mod server;
