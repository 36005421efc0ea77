//! Server Module
//!
//! This module contains server configuration, application state, and
//! initialization for the FinBro backend.
//!
//! - **`config`** - environment-driven configuration (database, proxy)
//! - **`state`** - `AppState` and Axum `FromRef` extraction
//! - **`init`** - application assembly

/// Environment-driven configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;
