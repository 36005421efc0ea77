//! Middleware Module
//!
//! Request identity extraction for the chat-history endpoints.

/// `X-User-Id` header extraction
pub mod identity;

pub use identity::UserId;
